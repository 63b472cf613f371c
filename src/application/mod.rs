//! Application layer: selecting and running the handler for each poll tick.
//!
//! [`dispatcher::HandlerRegistry`] collects provider handlers at start-up and
//! builds a [`dispatcher::Dispatcher`], which routes every batch either to the
//! matching provider handler or to the generic fallback.

pub mod dispatcher;
pub mod generic;
pub mod global;
pub mod providers;
pub mod redirect;
pub mod session;
