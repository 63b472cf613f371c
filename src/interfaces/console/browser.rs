use crate::domain::ports::Browser;
use crate::domain::status::StatusView;
use parking_lot::Mutex;
use std::io::Write;
use tracing::warn;

/// A browser stand-in that prints each outbound call as one line.
///
/// ```text
/// navigate /payment/status/42
/// notice An error occurred: Please contact support.
/// render pending=S1,S3;done=S2
/// ```
pub struct ConsoleBrowser<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> ConsoleBrowser<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn emit(&self, line: &str) {
        let mut writer = self.writer.lock();
        if let Err(e) = writeln!(writer, "{line}").and_then(|()| writer.flush()) {
            warn!(error = %e, "failed to write browser event");
        }
    }
}

impl<W: Write + Send> Browser for ConsoleBrowser<W> {
    fn navigate(&self, route: &str) {
        self.emit(&format!("navigate {route}"));
    }

    fn notify(&self, message: &str) {
        self.emit(&format!("notice {message}"));
    }

    fn render(&self, view: &StatusView) {
        let groups: Vec<String> = view
            .groups
            .iter()
            .map(|(state, references)| {
                let state = state.map_or("unknown", |state| state.as_str());
                format!("{state}={}", references.join(","))
            })
            .collect();
        if groups.is_empty() {
            self.emit("render");
        } else {
            self.emit(&format!("render {}", groups.join(";")));
        }
    }
}
