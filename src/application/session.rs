use super::dispatcher::Dispatcher;
use crate::domain::ports::{Browser, Flow};
use crate::domain::status::StatusBatch;
use crate::error::{PostProcessingError, Result};
use std::time::Duration;
use tracing::{debug, warn};

/// How a polling session ended.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SessionOutcome {
    /// Ticks that reached the dispatcher.
    pub ticks: usize,
    /// Ticks dropped because they could not be read.
    pub skipped: usize,
    /// Set when a handler navigated away, which ends the session.
    pub navigated: Option<String>,
}

/// Feeds poll ticks to a dispatcher, one batch per tick.
///
/// The session stops at the first navigation or handler error. Ticks that
/// fail to parse are logged and skipped; an I/O error on the tick source
/// ends the session with that error.
pub struct PollingSession<'a> {
    dispatcher: &'a Dispatcher,
    browser: &'a dyn Browser,
    interval: Duration,
}

impl<'a> PollingSession<'a> {
    pub fn new(dispatcher: &'a Dispatcher, browser: &'a dyn Browser) -> Self {
        Self {
            dispatcher,
            browser,
            interval: Duration::ZERO,
        }
    }

    /// Delay between two consecutive ticks.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub async fn run<I>(&self, ticks: I) -> Result<SessionOutcome>
    where
        I: IntoIterator<Item = Result<StatusBatch>>,
    {
        let mut outcome = SessionOutcome {
            ticks: 0,
            skipped: 0,
            navigated: None,
        };

        for tick in ticks {
            if outcome.ticks + outcome.skipped > 0 && !self.interval.is_zero() {
                tokio::time::sleep(self.interval).await;
            }

            let batch = match tick {
                Ok(batch) => batch,
                Err(e @ PostProcessingError::Io(_)) => return Err(e),
                Err(e) => {
                    warn!(error = %e, "skipping unreadable poll tick");
                    outcome.skipped += 1;
                    continue;
                }
            };

            outcome.ticks += 1;
            debug!(tick = outcome.ticks, records = batch.len(), "poll tick");
            if let Flow::Navigated(route) = self.dispatcher.dispatch(batch, self.browser)? {
                outcome.navigated = Some(route);
                break;
            }
        }

        Ok(outcome)
    }
}
