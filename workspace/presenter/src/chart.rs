//! Wave-height chart: the series shown, its fixed styling, and the retained
//! instance that later invocations update in place.

use std::fmt;

/// Label of the trailing point holding the prediction.
pub const PREDICTED_LABEL: &str = "Predicted";

/// Labels and values plotted on the chart, one pair per point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// `Obs 1..n` for the observations followed by the predicted point.
    pub fn from_prediction(recent: &[f64], predicted: f64) -> Self {
        let mut labels: Vec<String> = (1..=recent.len()).map(|i| format!("Obs {}", i)).collect();
        labels.push(PREDICTED_LABEL.to_string());

        let mut values = recent.to_vec();
        values.push(predicted);

        Self { labels, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Everything needed to build the line chart the first time.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartConfig {
    pub series: ChartSeries,
    /// Legend entry of the single dataset
    pub dataset_label: &'static str,
    pub line_color: &'static str,
    pub fill_color: &'static str,
    /// Curve smoothing, 0.0 draws straight segments
    pub tension: f64,
    pub y_axis_title: &'static str,
    pub x_axis_title: &'static str,
}

impl LineChartConfig {
    /// Blue filled line with a slight curve, meters against time steps.
    pub fn wave_height(series: ChartSeries) -> Self {
        Self {
            series,
            dataset_label: "Wave Height (m)",
            line_color: "rgb(54, 162, 235)",
            fill_color: "rgba(54, 162, 235, 0.2)",
            tension: 0.3,
            y_axis_title: "Wave Height (m)",
            x_axis_title: "Time Steps (recent → predicted)",
        }
    }
}

/// A chart that already exists on some rendering backend.
pub trait ChartInstance {
    /// Replace labels and values; nothing is appended.
    fn set_series(&mut self, series: &ChartSeries);

    /// Repaint after `set_series`.
    fn redraw(&mut self);
}

/// A place a chart can be created in (a DOM element, a terminal, a mock).
pub trait ChartMount {
    fn create_line_chart(&mut self, config: &LineChartConfig) -> Box<dyn ChartInstance>;
}

/// What [`ChartHandle::render`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartAction {
    Created,
    Updated,
}

/// Owned handle to the chart created by the first successful render.
///
/// The handle lives as long as its owner (a page session, a test) and is
/// passed into every invocation, so later renders update the same instance.
#[derive(Default)]
pub struct ChartHandle {
    instance: Option<Box<dyn ChartInstance>>,
}

impl ChartHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_created(&self) -> bool {
        self.instance.is_some()
    }

    /// Update the retained chart in place, or create it on `mount` if this is
    /// the first render.
    pub fn render(&mut self, mount: &mut dyn ChartMount, series: ChartSeries) -> ChartAction {
        match self.instance.as_mut() {
            Some(instance) => {
                tracing::trace!(points = series.len(), "Updating retained chart");
                instance.set_series(&series);
                instance.redraw();
                ChartAction::Updated
            }
            None => {
                tracing::debug!(points = series.len(), "Creating wave height chart");
                let config = LineChartConfig::wave_height(series);
                self.instance = Some(mount.create_line_chart(&config));
                ChartAction::Created
            }
        }
    }
}

impl fmt::Debug for ChartHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartHandle")
            .field("created", &self.is_created())
            .finish()
    }
}
