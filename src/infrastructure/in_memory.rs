use crate::domain::ports::Browser;
use crate::domain::status::StatusView;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, PartialEq, Clone)]
pub enum BrowserEvent {
    Navigate(String),
    Notice(String),
    Render(StatusView),
}

/// A headless browser that records every outbound call.
///
/// Clones share the same event log, so a test can hand one clone to the
/// dispatcher and inspect the other afterwards.
#[derive(Default, Clone)]
pub struct InMemoryBrowser {
    events: Arc<Mutex<Vec<BrowserEvent>>>,
}

impl InMemoryBrowser {
    /// Creates a browser with an empty event log.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<BrowserEvent> {
        self.events.lock().clone()
    }

    /// Routes passed to `navigate`, in call order.
    pub fn navigations(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                BrowserEvent::Navigate(route) => Some(route.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn notices(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                BrowserEvent::Notice(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Browser for InMemoryBrowser {
    fn navigate(&self, route: &str) {
        self.events.lock().push(BrowserEvent::Navigate(route.to_owned()));
    }

    fn notify(&self, message: &str) {
        self.events.lock().push(BrowserEvent::Notice(message.to_owned()));
    }

    fn render(&self, view: &StatusView) {
        self.events.lock().push(BrowserEvent::Render(view.clone()));
    }
}
