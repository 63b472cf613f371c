use crate::domain::ports::{Browser, Flow, PostProcessingHandler};
use crate::domain::status::{StatusBatch, StatusView};
use crate::error::Result;
use tracing::{debug, info};

/// Fallback used for every provider without a handler of its own.
///
/// When the first transaction has reached a final state and the server gave
/// a landing route, the customer is sent there. Otherwise the status page is
/// rendered and polling continues.
#[derive(Default)]
pub struct GenericStatusHandler;

impl GenericStatusHandler {
    pub fn new() -> Self {
        Self
    }
}

impl PostProcessingHandler for GenericStatusHandler {
    fn handle(&self, batch: &StatusBatch, browser: &dyn Browser) -> Result<Flow> {
        if let Some(record) = batch.first()
            && let Some(state) = record.state()
            && state.is_final()
            && let Some(route) = record.landing_route()
        {
            info!(state = state.as_str(), route, "transaction is final, redirecting");
            browser.navigate(route);
            return Ok(Flow::Navigated(route.to_owned()));
        }

        let view = StatusView::from_batch(batch);
        debug!(groups = view.groups.len(), "rendering status page");
        browser.render(&view);
        Ok(Flow::KeepPolling)
    }
}
