//! Recording regions and chart used by the unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::chart::{ChartInstance, ChartMount, ChartSeries, LineChartConfig};
use crate::view::{PredictionView, RecentList, StatusLine};

/// Initialize tracing for tests with output to STDERR.
///
/// The level comes from RUST_LOG and defaults to WARN.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

#[derive(Debug, Default)]
pub struct RecordingStatus {
    pub text: String,
}

impl StatusLine for RecordingStatus {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

#[derive(Debug, Default)]
pub struct RecordingList {
    pub items: Vec<String>,
}

impl RecentList for RecordingList {
    fn clear(&mut self) {
        self.items.clear();
    }

    fn push_item(&mut self, text: &str) {
        self.items.push(text.to_string());
    }
}

/// Everything the mock chart saw.
#[derive(Debug, Clone, Default)]
pub struct ChartLog {
    pub created: usize,
    pub redraws: usize,
    pub config: Option<LineChartConfig>,
    /// Series currently held by the instance
    pub series: ChartSeries,
}

#[derive(Debug, Default)]
pub struct RecordingChartMount {
    pub log: Rc<RefCell<ChartLog>>,
}

impl ChartMount for RecordingChartMount {
    fn create_line_chart(&mut self, config: &LineChartConfig) -> Box<dyn ChartInstance> {
        {
            let mut log = self.log.borrow_mut();
            log.created += 1;
            log.config = Some(config.clone());
            log.series = config.series.clone();
        }
        Box::new(RecordingChart {
            log: Rc::clone(&self.log),
        })
    }
}

struct RecordingChart {
    log: Rc<RefCell<ChartLog>>,
}

impl ChartInstance for RecordingChart {
    fn set_series(&mut self, series: &ChartSeries) {
        self.log.borrow_mut().series = series.clone();
    }

    fn redraw(&mut self) {
        self.log.borrow_mut().redraws += 1;
    }
}

/// View whose regions remember what was rendered into them.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub status: RecordingStatus,
    pub list: Option<RecordingList>,
    pub chart: Option<RecordingChartMount>,
}

impl RecordingView {
    pub fn full() -> Self {
        Self {
            status: RecordingStatus::default(),
            list: Some(RecordingList::default()),
            chart: Some(RecordingChartMount::default()),
        }
    }

    pub fn status_only() -> Self {
        Self::default()
    }

    pub fn status_text(&self) -> &str {
        &self.status.text
    }

    pub fn list_items(&self) -> Vec<String> {
        self.list.as_ref().map(|l| l.items.clone()).unwrap_or_default()
    }

    pub fn chart_log(&self) -> ChartLog {
        self.chart
            .as_ref()
            .map(|c| c.log.borrow().clone())
            .unwrap_or_default()
    }
}

impl PredictionView for RecordingView {
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
