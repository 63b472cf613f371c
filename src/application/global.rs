//! Process-wide dispatcher for the page session.
//!
//! Providers register into a [`HandlerRegistry`](super::dispatcher::HandlerRegistry)
//! during start-up, the built dispatcher is installed here once, and every
//! poll tick after that goes through [`dispatcher`]. There is no teardown.

use super::dispatcher::Dispatcher;
use crate::error::{PostProcessingError, Result};
use std::sync::OnceLock;

static DISPATCHER: OnceLock<Dispatcher> = OnceLock::new();

/// Installs the session dispatcher. Fails if one is already installed.
pub fn install(dispatcher: Dispatcher) -> Result<&'static Dispatcher> {
    let mut fresh = false;
    let installed = DISPATCHER.get_or_init(|| {
        fresh = true;
        dispatcher
    });
    if fresh {
        Ok(installed)
    } else {
        Err(PostProcessingError::AlreadyInstalled)
    }
}

/// The installed dispatcher, if start-up has completed.
pub fn dispatcher() -> Option<&'static Dispatcher> {
    DISPATCHER.get()
}
