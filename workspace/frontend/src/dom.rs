//! DOM regions looked up by id.

use presenter::{ChartMount, PredictionView, RecentList, StatusLine};
use web_sys::{Document, Element};

use crate::plot::PlotlyMount;

pub const RESULT_ID: &str = "result";
pub const RECENT_LIST_ID: &str = "recent-list";
pub const CHART_ID: &str = "waveChart";

struct DomStatus {
    element: Element,
}

impl StatusLine for DomStatus {
    fn set_text(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}

struct DomList {
    document: Document,
    element: Element,
}

impl RecentList for DomList {
    fn clear(&mut self) {
        self.element.set_inner_html("");
    }

    fn push_item(&mut self, text: &str) {
        let item = match self.document.create_element("li") {
            Ok(item) => item,
            Err(e) => {
                log::error!("Failed to create list item: {:?}", e);
                return;
            }
        };
        item.set_text_content(Some(text));
        if let Err(e) = self.element.append_child(&item) {
            log::error!("Failed to append list item: {:?}", e);
        }
    }
}

/// The page's prediction regions, as currently present in the document.
pub struct DocumentView {
    status: DomStatus,
    list: Option<DomList>,
    chart: Option<PlotlyMount>,
}

impl DocumentView {
    /// `None` when the page has no `#result` element.
    pub fn lookup() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let status = document.get_element_by_id(RESULT_ID)?;

        let list = document
            .get_element_by_id(RECENT_LIST_ID)
            .map(|element| DomList {
                document: document.clone(),
                element,
            });
        let chart = document.get_element_by_id(CHART_ID).map(PlotlyMount::new);

        log::trace!(
            "Regions found: list={}, chart={}",
            list.is_some(),
            chart.is_some()
        );

        Some(Self {
            status: DomStatus { element: status },
            list,
            chart,
        })
    }
}

impl PredictionView for DocumentView {
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
