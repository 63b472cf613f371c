use super::dispatcher::HandlerRegistry;
use super::redirect::ImmediateRedirectHandler;
use crate::error::Result;

pub const URWAY: &str = "urway";

/// A registry holding the handlers shipped with this crate.
pub fn standard_registry() -> Result<HandlerRegistry> {
    let mut registry = HandlerRegistry::new();
    registry.register(URWAY, Box::new(ImmediateRedirectHandler::new(URWAY)))?;
    Ok(registry)
}

/// Registers an immediate-redirect handler for each of `codes`.
pub fn register_redirect_providers<I, S>(registry: &mut HandlerRegistry, codes: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for code in codes {
        let code = code.into();
        let handler = Box::new(ImmediateRedirectHandler::new(code.clone()));
        registry.register(code, handler)?;
    }
    Ok(())
}
