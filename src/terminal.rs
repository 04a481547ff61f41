//! Terminal rendering of the prediction regions.

use std::cell::RefCell;
use std::rc::Rc;

use presenter::{
    fixed_text, ChartInstance, ChartMount, ChartSeries, LineChartConfig, PredictionView, RecentList, StatusLine,
};

/// Width of the longest bar, in characters
const BAR_WIDTH: usize = 40;

#[derive(Debug, Default)]
pub struct TextStatus {
    text: String,
}

impl StatusLine for TextStatus {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

#[derive(Debug, Default)]
pub struct TextList {
    items: Vec<String>,
}

impl RecentList for TextList {
    fn clear(&mut self) {
        self.items.clear();
    }

    fn push_item(&mut self, text: &str) {
        self.items.push(text.to_string());
    }
}

/// Mount whose charts draw into a shared frame of text lines.
#[derive(Debug, Default)]
pub struct TextChartMount {
    frame: Rc<RefCell<Vec<String>>>,
}

impl ChartMount for TextChartMount {
    fn create_line_chart(&mut self, config: &LineChartConfig) -> Box<dyn ChartInstance> {
        let chart = TextChart {
            config: config.clone(),
            frame: Rc::clone(&self.frame),
        };
        chart.draw();
        Box::new(chart)
    }
}

struct TextChart {
    config: LineChartConfig,
    frame: Rc<RefCell<Vec<String>>>,
}

impl TextChart {
    fn draw(&self) {
        *self.frame.borrow_mut() = draw_bars(&self.config);
    }
}

impl ChartInstance for TextChart {
    fn set_series(&mut self, series: &ChartSeries) {
        self.config.series = series.clone();
    }

    fn redraw(&mut self) {
        self.draw();
    }
}

/// Horizontal bar chart, one row per point, scaled to the largest value.
pub fn draw_bars(config: &LineChartConfig) -> Vec<String> {
    let series = &config.series;
    let max = series.values.iter().copied().fold(0.0_f64, f64::max);
    let label_width = series.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut lines = vec![format!("{} / {}", config.y_axis_title, config.x_axis_title)];
    for (label, value) in series.labels.iter().zip(&series.values) {
        let bar = if max > 0.0 && *value > 0.0 {
            ((value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        lines.push(format!(
            "{:>lw$} | {:<bw$} {}",
            label,
            "#".repeat(bar),
            fixed_text(*value, 3),
            lw = label_width,
            bw = BAR_WIDTH
        ));
    }
    lines
}

/// The three regions, printed top to bottom.
#[derive(Debug, Default)]
pub struct TerminalView {
    status: TextStatus,
    list: Option<TextList>,
    chart: Option<TextChartMount>,
}

impl TerminalView {
    pub fn new(show_list: bool, show_chart: bool) -> Self {
        Self {
            status: TextStatus::default(),
            list: show_list.then(TextList::default),
            chart: show_chart.then(TextChartMount::default),
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!("{}\n", self.status.text);

        if let Some(list) = self.list.as_ref().filter(|l| !l.items.is_empty()) {
            out.push_str("\nRecent observations:\n");
            for item in &list.items {
                out.push_str(&format!("  - {}\n", item));
            }
        }

        if let Some(chart) = &self.chart {
            let frame = chart.frame.borrow();
            if !frame.is_empty() {
                out.push('\n');
                for line in frame.iter() {
                    out.push_str(line);
                    out.push('\n');
                }
            }
        }

        out
    }
}

impl PredictionView for TerminalView {
    fn status(&mut self) -> &mut dyn StatusLine {
        &mut self.status
    }

    fn recent_list(&mut self) -> Option<&mut dyn RecentList> {
        self.list.as_mut().map(|l| l as &mut dyn RecentList)
    }

    fn chart_mount(&mut self) -> Option<&mut dyn ChartMount> {
        self.chart.as_mut().map(|c| c as &mut dyn ChartMount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::PredictionResponse;
    use presenter::{present_response, ChartHandle};

    #[test]
    fn renders_all_regions() {
        let mut view = TerminalView::new(true, true);
        let mut chart = ChartHandle::new();

        present_response(
            &mut view,
            &mut chart,
            &PredictionResponse::prediction(3.5, vec![1.23456, 2.0]),
        );
        let out = view.render();

        assert!(out.starts_with("Predicted Wave Height: 3.5 meters\n"));
        assert!(out.contains("  - Step 1: 1.235 m\n"));
        assert!(out.contains("  - Step 2: 2.000 m\n"));
        assert!(out.contains("Wave Height (m) / Time Steps (recent → predicted)"));
        assert!(out.contains("Predicted | ######################################## 3.500"));
    }

    #[test]
    fn redraw_replaces_previous_frame() {
        let mut view = TerminalView::new(false, true);
        let mut chart = ChartHandle::new();

        present_response(&mut view, &mut chart, &PredictionResponse::prediction(2.0, vec![1.0, 1.5]));
        present_response(&mut view, &mut chart, &PredictionResponse::prediction(0.8, vec![0.4]));
        let out = view.render();

        assert!(out.contains("Obs 1"));
        assert!(!out.contains("Obs 2"));
        assert!(!out.contains("Recent observations"));
    }

    #[test]
    fn bars_scale_to_largest_value() {
        let config = LineChartConfig::wave_height(ChartSeries::from_prediction(&[1.0], 2.0));
        let lines = draw_bars(&config);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].matches('#').count(), BAR_WIDTH / 2);
        assert_eq!(lines[2].matches('#').count(), BAR_WIDTH);
    }

    #[test]
    fn non_positive_values_draw_no_bar() {
        let config = LineChartConfig::wave_height(ChartSeries::from_prediction(&[0.0, -1.0], 0.0));
        let lines = draw_bars(&config);

        assert!(lines.iter().skip(1).all(|l| !l.contains('#')));
    }
}
