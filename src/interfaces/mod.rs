//! Adapters at the process edge: the JSON-lines tick source and the
//! console stand-in for the browser.

pub mod console;
pub mod json;
