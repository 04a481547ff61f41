use async_trait::async_trait;
use common::PredictionResponse;
use tracing::{debug, instrument};

use crate::chart::ChartHandle;
use crate::error::FetchError;
use crate::generation::{GenerationCounter, Ticket};
use crate::present::{Outcome, present};
use crate::view::PredictionView;

/// Something that can ask the prediction endpoint for one response.
///
/// Futures are not required to be `Send` so browser fetch implementations fit.
#[async_trait(?Send)]
pub trait PredictionSource {
    /// One GET, body decoded regardless of the HTTP status.
    async fn fetch(&self) -> Result<PredictionResponse, FetchError>;
}

/// Predict trigger bound to a source.
///
/// Every invocation takes a generation ticket before its request goes out;
/// a response is handed back only if no newer invocation began meanwhile.
#[derive(Debug, Clone)]
pub struct PredictTrigger<S> {
    source: S,
    generations: GenerationCounter,
}

impl<S: PredictionSource> PredictTrigger<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            generations: GenerationCounter::new(),
        }
    }

    /// Perform the request; `None` when the result is already stale.
    #[instrument(skip(self))]
    pub async fn fetch_latest(&self) -> Option<Result<PredictionResponse, FetchError>> {
        let ticket = self.generations.begin();
        debug!(generation = ticket.generation(), "Requesting prediction");

        let result = self.source.fetch().await;
        Self::keep_if_current(&ticket, result)
    }

    /// Request and render one prediction onto `view`.
    ///
    /// Returns `None` and renders nothing when superseded.
    pub async fn invoke<V>(&self, view: &mut V, chart: &mut ChartHandle) -> Option<Outcome>
    where
        V: PredictionView + ?Sized,
    {
        let result = self.fetch_latest().await?;
        Some(present(view, chart, result))
    }

    fn keep_if_current<T>(ticket: &Ticket, result: T) -> Option<T> {
        if ticket.is_current() {
            Some(result)
        } else {
            debug!(generation = ticket.generation(), "Dropping superseded prediction response");
            None
        }
    }
}
