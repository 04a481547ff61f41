use anyhow::{Context, Result};
use presenter::{ChartHandle, PredictTrigger};
use std::time::Duration;
use tracing::{debug, info};

use crate::terminal::TerminalView;
use crate::upstream::PredictionClient;

/// Settings for the `predict` command
#[derive(Debug, Clone)]
pub struct PredictOptions {
    pub url: String,
    pub timeout: Duration,
    pub show_list: bool,
    pub show_chart: bool,
}

/// Run one predict invocation against `options.url` and print the regions.
///
/// Every rendered outcome, failures included, exits successfully; only a
/// client that cannot be built is an error.
pub async fn predict(options: &PredictOptions) -> Result<()> {
    debug!("Predict options: {:?}", options);

    let client = PredictionClient::new(options.url.clone(), options.timeout)
        .context("failed to build HTTP client")?;
    let trigger = PredictTrigger::new(client);

    let mut view = TerminalView::new(options.show_list, options.show_chart);
    let mut chart = ChartHandle::new();

    let outcome = trigger.invoke(&mut view, &mut chart).await;
    info!("Predict outcome: {:?}", outcome);

    print!("{}", view.render());
    Ok(())
}
