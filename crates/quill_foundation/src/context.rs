//! Per-invocation execution context.

use std::collections::HashMap;

use crate::entity::EntityRef;

/// Immutable snapshot handed to `execute` for one event occurrence.
///
/// Maps role names (`"player"`, `"sender"`) to the entities bound for this
/// invocation and records the originating line number. The host builds one
/// per event; the core only reads it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Context {
    roles: HashMap<String, EntityRef>,
    line: usize,
}

impl Context {
    /// Creates a context with no bound roles.
    #[must_use]
    pub fn new(line: usize) -> Self {
        Self {
            roles: HashMap::new(),
            line,
        }
    }

    /// Creates a context from a role mapping.
    #[must_use]
    pub fn from_roles(roles: HashMap<String, EntityRef>, line: usize) -> Self {
        Self { roles, line }
    }

    /// Binds an entity to a role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>, entity: EntityRef) -> Self {
        self.roles.insert(role.into(), entity);
        self
    }

    /// Looks up the entity bound to a role (case-insensitive).
    #[must_use]
    pub fn entity(&self, role: &str) -> Option<&EntityRef> {
        self.roles.get(role).or_else(|| {
            self.roles
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(role))
                .map(|(_, entity)| entity)
        })
    }

    /// Returns the originating line number.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Iterates over bound role names.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }
}
