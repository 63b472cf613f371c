//! Domain layer: status records delivered by the poller and the ports
//! through which handlers are invoked and reach the browser.

pub mod ports;
pub mod status;
