//! Built-in script elements.
//!
//! Registration order is trial order: literals come first so `3` is never
//! read as an entity name, and the catch-all entity name comes last.

mod conditions;
mod effects;
mod expressions;
mod functions;
mod literals;

use quill_foundation::Result;

use crate::registry::ElementRegistry;

/// Registers every built-in element, in trial order.
///
/// # Errors
/// Fails only if a built-in pattern is malformed.
pub fn register_all(registry: &mut ElementRegistry) -> Result<()> {
    literals::register(registry)?;
    expressions::register(registry)?;
    literals::register_entity_names(registry)?;
    functions::register(registry)?;
    conditions::register(registry)?;
    effects::register(registry)?;
    Ok(())
}
