use super::status::{StatusBatch, StatusView};
use crate::error::Result;

/// What a handler decided for the current tick.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Flow {
    /// No definitive outcome yet; the poller may deliver another tick.
    KeepPolling,
    /// A full-page navigation was requested. The page context is gone after
    /// this, so nothing else may run for the session.
    Navigated(String),
}

/// Outbound side effects available to handlers.
pub trait Browser: Send + Sync {
    /// Full-page navigation. Terminal; callers must return right after.
    fn navigate(&self, route: &str);
    /// Blocking notice shown to the customer.
    fn notify(&self, message: &str);
    /// Renders the generic status page.
    fn render(&self, view: &StatusView);
}

/// Processes the batch of one poll tick.
///
/// The default handler and every provider handler implement this same trait,
/// so the dispatcher treats them uniformly.
pub trait PostProcessingHandler: Send + Sync {
    fn handle(&self, batch: &StatusBatch, browser: &dyn Browser) -> Result<Flow>;
}

pub type HandlerBox = Box<dyn PostProcessingHandler>;
pub type BrowserBox = Box<dyn Browser>;
