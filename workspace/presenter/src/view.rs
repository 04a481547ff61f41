//! UI regions a prediction is rendered into.
//!
//! The status line is mandatory. The list and the chart are capability
//! queries: a view without them returns `None` and those steps are skipped.

use crate::chart::ChartMount;

/// Single line of text telling the user what happened.
pub trait StatusLine {
    fn set_text(&mut self, text: &str);
}

/// Container of the per-observation lines.
pub trait RecentList {
    /// Drop every item currently shown.
    fn clear(&mut self);

    fn push_item(&mut self, text: &str);
}

/// The set of regions one page (or terminal, or test) exposes.
pub trait PredictionView {
    fn status(&mut self) -> &mut dyn StatusLine;

    fn recent_list(&mut self) -> Option<&mut dyn RecentList>;

    fn chart_mount(&mut self) -> Option<&mut dyn ChartMount>;
}
