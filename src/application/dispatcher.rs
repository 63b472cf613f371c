use crate::domain::ports::{Browser, Flow, HandlerBox, PostProcessingHandler};
use crate::domain::status::StatusBatch;
use crate::error::{PostProcessingError, Result};
use std::collections::HashMap;
use tracing::debug;

/// Collects provider handlers during start-up.
///
/// Registration is append-only: a provider code can be claimed once, and a
/// second registration for the same code is rejected rather than replacing
/// the first. Call [`HandlerRegistry::build`] once every provider is in.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, HandlerBox>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates `handler` with `provider_code`.
    pub fn register(&mut self, provider_code: impl Into<String>, handler: HandlerBox) -> Result<()> {
        let provider_code = provider_code.into();
        if self.handlers.contains_key(&provider_code) {
            return Err(PostProcessingError::DuplicateProvider(provider_code));
        }
        debug!(provider = %provider_code, "registered post-processing handler");
        self.handlers.insert(provider_code, handler);
        Ok(())
    }

    pub fn is_registered(&self, provider_code: &str) -> bool {
        self.handlers.contains_key(provider_code)
    }

    /// Closes registration and pairs the provider handlers with the fallback.
    pub fn build(self, default: HandlerBox) -> Dispatcher {
        Dispatcher {
            providers: self.handlers,
            default,
        }
    }
}

/// Routes each poll tick to exactly one handler.
///
/// The dispatcher is immutable once built, so a provider code resolves to
/// the same handler for the whole session.
pub struct Dispatcher {
    providers: HashMap<String, HandlerBox>,
    default: HandlerBox,
}

impl Dispatcher {
    /// Hands `batch` to the handler registered for its first record's
    /// provider, or to the default handler when the batch is empty or the
    /// provider has no handler of its own.
    pub fn dispatch(&self, batch: StatusBatch, browser: &dyn Browser) -> Result<Flow> {
        let handler = self.select(&batch);
        handler.handle(&batch, browser)
    }

    fn select(&self, batch: &StatusBatch) -> &dyn PostProcessingHandler {
        let provider = batch
            .first()
            .map(|record| record.provider_code.as_str())
            .and_then(|code| self.providers.get_key_value(code));

        match provider {
            Some((code, handler)) => {
                debug!(provider = %code, records = batch.len(), "dispatching to provider handler");
                handler.as_ref()
            }
            None => {
                debug!(records = batch.len(), "dispatching to default handler");
                self.default.as_ref()
            }
        }
    }

    pub fn provider_codes(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }
}
