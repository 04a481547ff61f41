//! Predict trigger: turns one `/predict` response into updates of the status
//! line, the recent-observations list and the wave-height chart.
//!
//! Rendering targets are reached through the capability traits in [`view`]
//! and [`chart`], so the same flow drives the browser DOM, the terminal and
//! the recording mocks used in tests.

pub mod chart;
pub mod error;
pub mod format;
pub mod generation;
pub mod numeric;
pub mod present;
pub mod trigger;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use chart::{ChartAction, ChartHandle, ChartInstance, ChartMount, ChartSeries, LineChartConfig};
pub use error::FetchError;
pub use format::{Classification, classify, failure_status, recent_list_items, status_text};
pub use generation::{GenerationCounter, Ticket};
pub use numeric::{fixed_text, shortest_text};
pub use present::{Outcome, present, present_failure, present_response};
pub use trigger::{PredictTrigger, PredictionSource};
pub use view::{PredictionView, RecentList, StatusLine};
