use crate::domain::ports::{Browser, Flow, PostProcessingHandler};
use crate::domain::status::StatusBatch;
use crate::error::{PostProcessingError, Result};
use tracing::{error, info};

pub const SUPPORT_NOTICE: &str = "An error occurred: Please contact support.";

/// Sends the customer straight to the landing route, skipping the generic
/// pending page.
///
/// Providers using this handler promise a landing route on every status
/// record. A record without one is an upstream contract violation: it is
/// logged, the customer gets a blocking notice, and the session fails with
/// [`PostProcessingError::MissingLandingRoute`] instead of polling on.
pub struct ImmediateRedirectHandler {
    provider_code: String,
}

impl ImmediateRedirectHandler {
    pub fn new(provider_code: impl Into<String>) -> Self {
        Self {
            provider_code: provider_code.into(),
        }
    }
}

impl PostProcessingHandler for ImmediateRedirectHandler {
    fn handle(&self, batch: &StatusBatch, browser: &dyn Browser) -> Result<Flow> {
        // Only the first record is looked at.
        let route = batch.first().and_then(|record| record.landing_route());

        match route {
            Some(route) => {
                info!(provider = %self.provider_code, route, "redirecting to landing route");
                browser.navigate(route);
                Ok(Flow::Navigated(route.to_owned()))
            }
            None => {
                error!(provider = %self.provider_code, "landing route is not defined");
                browser.notify(SUPPORT_NOTICE);
                Err(PostProcessingError::MissingLandingRoute {
                    provider_code: self.provider_code.clone(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::status::StatusRecord;
    use crate::infrastructure::in_memory::{BrowserEvent, InMemoryBrowser};
    use parking_lot::Mutex;
    use std::io;
    use std::sync::Arc;

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    fn urway(route: Option<&str>) -> StatusBatch {
        StatusBatch::new(vec![StatusRecord::new("urway", route)])
    }

    #[test]
    fn test_navigates_to_landing_route() {
        let browser = InMemoryBrowser::new();
        let handler = ImmediateRedirectHandler::new("urway");

        let flow = handler
            .handle(&urway(Some("/payment/status/42")), &browser)
            .unwrap();

        assert_eq!(flow, Flow::Navigated("/payment/status/42".to_string()));
        assert_eq!(
            browser.events(),
            vec![BrowserEvent::Navigate("/payment/status/42".to_string())]
        );
    }

    #[test]
    fn test_empty_route_is_a_contract_violation() {
        let browser = InMemoryBrowser::new();
        let handler = ImmediateRedirectHandler::new("urway");

        let result = handler.handle(&urway(Some("")), &browser);

        assert!(matches!(
            result,
            Err(PostProcessingError::MissingLandingRoute { ref provider_code }) if provider_code == "urway"
        ));
        assert!(browser.navigations().is_empty());
        assert_eq!(browser.notices(), vec![SUPPORT_NOTICE.to_string()]);
    }

    #[test]
    fn test_absent_route_is_a_contract_violation() {
        let browser = InMemoryBrowser::new();
        let handler = ImmediateRedirectHandler::new("urway");

        let result = handler.handle(&urway(None), &browser);

        assert!(result.is_err());
        assert!(browser.navigations().is_empty());
        assert_eq!(browser.notices().len(), 1);
    }

    #[test]
    fn test_later_records_are_not_inspected() {
        let browser = InMemoryBrowser::new();
        let handler = ImmediateRedirectHandler::new("urway");
        let batch = StatusBatch::new(vec![
            StatusRecord::new("urway", Some("/first")),
            StatusRecord::new("urway", Some("/second")),
        ]);

        handler.handle(&batch, &browser).unwrap();

        assert_eq!(browser.navigations(), vec!["/first".to_string()]);
    }

    #[test]
    fn test_missing_route_logs_an_error() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let browser = InMemoryBrowser::new();
        let handler = ImmediateRedirectHandler::new("urway");

        let result = tracing::subscriber::with_default(subscriber, || {
            handler.handle(&urway(None), &browser)
        });

        assert!(result.is_err());
        let output = logs.contents();
        assert!(output.contains("ERROR"), "no error event in: {output}");
        assert!(output.contains("provider=urway"), "no provider field in: {output}");
        assert!(output.contains("landing route is not defined"));
    }
}
