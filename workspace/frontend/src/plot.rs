//! Plotly-backed wave height chart.

use plotly::common::{Fill, Line, LineShape, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Scatter};
use presenter::{ChartInstance, ChartMount, ChartSeries, LineChartConfig};
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn react(div_id: &str, data: JsValue, layout: JsValue) -> Result<(), JsValue>;
}

/// Id given to a mount element that has none
const FALLBACK_DIV_ID: &str = "waveChart";

/// Trace and layout of the chart, as plain JSON.
pub fn plot_json(config: &LineChartConfig) -> Result<(serde_json::Value, serde_json::Value), serde_json::Error> {
    let trace = Scatter::new(config.series.labels.clone(), config.series.values.clone())
        .mode(Mode::LinesMarkers)
        .name(config.dataset_label)
        .line(
            Line::new()
                .color(config.line_color)
                .width(2.0)
                .shape(LineShape::Spline)
                .smoothing(config.tension),
        )
        .fill(Fill::ToZeroY)
        .fill_color(config.fill_color);

    let layout = Layout::new()
        .x_axis(Axis::new().title(Title::from(config.x_axis_title)))
        .y_axis(Axis::new().title(Title::from(config.y_axis_title)))
        .height(400);

    Ok((serde_json::to_value(&trace)?, serde_json::to_value(&layout)?))
}

fn to_js(config: &LineChartConfig) -> Result<(JsValue, JsValue), JsValue> {
    let (trace, layout) =
        plot_json(config).map_err(|e| JsValue::from_str(&format!("Failed to serialize chart: {}", e)))?;

    let data_js = js_sys::Array::new();
    data_js.push(&js_sys::JSON::parse(&trace.to_string())?);
    let layout_js = js_sys::JSON::parse(&layout.to_string())?;

    Ok((data_js.into(), layout_js))
}

/// The `#waveChart` element, ready to host a plot.
pub struct PlotlyMount {
    element: Element,
}

impl PlotlyMount {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl ChartMount for PlotlyMount {
    fn create_line_chart(&mut self, config: &LineChartConfig) -> Box<dyn ChartInstance> {
        if self.element.id().is_empty() {
            self.element.set_id(FALLBACK_DIV_ID);
        }

        let chart = PlotlyChart {
            div_id: self.element.id(),
            config: config.clone(),
        };
        match to_js(&chart.config).and_then(|(data, layout)| newPlot(&chart.div_id, data, layout)) {
            Ok(()) => log::debug!("Created chart in #{}", chart.div_id),
            Err(e) => log::error!("Failed to create chart in #{}: {:?}", chart.div_id, e),
        }
        Box::new(chart)
    }
}

/// A plot already drawn into a div; redraws go through `Plotly.react`.
struct PlotlyChart {
    div_id: String,
    config: LineChartConfig,
}

impl ChartInstance for PlotlyChart {
    fn set_series(&mut self, series: &ChartSeries) {
        self.config.series = series.clone();
    }

    fn redraw(&mut self) {
        match to_js(&self.config).and_then(|(data, layout)| react(&self.div_id, data, layout)) {
            Ok(()) => log::trace!("Redrew chart in #{}", self.div_id),
            Err(e) => log::error!("Failed to redraw chart in #{}: {:?}", self.div_id, e),
        }
    }
}
