use presenter::{present, ChartHandle, Outcome, PredictTrigger};
use yew::prelude::*;

use crate::api_client::GlooPredictionSource;
use crate::dom::{DocumentView, CHART_ID, RECENT_LIST_ID, RESULT_ID};

/// Predict button and the three regions the prediction is rendered into.
///
/// The regions are filled by [`DocumentView`] rather than by re-rendering,
/// so this component keeps no state that would make Yew redraw them.
#[function_component(PredictPanel)]
pub fn predict_panel() -> Html {
    let trigger = use_memo((), |_| PredictTrigger::new(GlooPredictionSource::from_settings()));
    let chart = use_mut_ref(ChartHandle::new);

    let onclick = {
        let trigger = trigger.clone();
        let chart = chart.clone();

        Callback::from(move |_: MouseEvent| {
            log::debug!("User clicked predict button");
            let trigger = trigger.clone();
            let chart = chart.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let Some(result) = trigger.fetch_latest().await else {
                    return;
                };

                let Some(mut view) = DocumentView::lookup() else {
                    log::error!("No #{} element on the page; prediction not shown", RESULT_ID);
                    return;
                };

                let outcome = present(&mut view, &mut chart.borrow_mut(), result);
                if let Outcome::Predicted { wave_height, .. } = outcome {
                    log::info!("Predicted wave height: {} m", wave_height);
                }
            });
        })
    };

    html! {
        <section class="card bg-base-100 shadow">
            <div class="card-body">
                <button class="btn btn-primary" {onclick}>{"Predict Wave Height"}</button>
                <p id={RESULT_ID} class="text-lg font-semibold mt-4"></p>
                <ul id={RECENT_LIST_ID} class="list-disc list-inside text-sm"></ul>
                <div id={CHART_ID} style="width:100%; height:400px;"></div>
            </div>
        </section>
    }
}
