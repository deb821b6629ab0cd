//! Host integration boundary.
//!
//! Nodes that touch the outside world (feeding a player, dispatching a
//! command, reading the displayed player limit) call through the [`Host`]
//! trait. Every method has a default body that fails with an
//! "unimplemented operation" error, so a host only overrides what it
//! supports and the core never silently does nothing.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use quill_foundation::{EntityRef, Error, Result, Value};

use crate::capability::ChangeMode;

/// Side effects and queries the embedding application provides.
///
/// Implementations must be shareable across threads: compiled scripts hold
/// the host and may be executed concurrently.
pub trait Host: Send + Sync {
    /// Runs a command line, optionally on behalf of `sender`.
    ///
    /// # Errors
    /// Fails if the host does not dispatch commands or the command fails.
    fn dispatch_command(&self, sender: Option<&EntityRef>, command: &str) -> Result<()> {
        let _ = (sender, command);
        Err(Error::unimplemented("command effect"))
    }

    /// Restores hunger for `player`, by `amount` or fully when `None`.
    ///
    /// # Errors
    /// Fails if the host does not support feeding.
    fn feed(&self, player: &EntityRef, amount: Option<f64>) -> Result<()> {
        let _ = (player, amount);
        Err(Error::unimplemented("feed effect"))
    }

    /// Shows or hides player details in the server list.
    ///
    /// # Errors
    /// Fails if the host does not support toggling player info.
    fn set_player_info_visible(&self, visible: bool) -> Result<()> {
        let _ = visible;
        Err(Error::unimplemented("player info effect"))
    }

    /// Reports whether `entity` is standing on the ground.
    ///
    /// # Errors
    /// Fails if the host cannot answer for this entity.
    fn is_on_ground(&self, entity: &EntityRef) -> Result<bool> {
        let _ = entity;
        Err(Error::unimplemented("on ground condition"))
    }

    /// Returns the player limit shown in the server list.
    ///
    /// # Errors
    /// Fails if the host does not expose the value.
    fn fake_max_players(&self) -> Result<f64> {
        Err(Error::unimplemented("fake max players expression"))
    }

    /// Applies a change to the shown player limit.
    ///
    /// `value` is present for add, remove and set.
    ///
    /// # Errors
    /// Fails if the host does not support the change.
    fn change_fake_max_players(&self, mode: ChangeMode, value: Option<&Value>) -> Result<()> {
        let _ = value;
        Err(Error::unimplemented(format!("{mode} fake max players")))
    }
}

/// A host that supports nothing.
///
/// Useful for parsing and folding without an embedding application; every
/// host-bound node fails when executed.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHost;

impl Host for NoHost {}

/// Shared, cloneable handle to a [`Host`], stored inside host-bound nodes.
#[derive(Clone)]
pub struct HostHandle(Arc<dyn Host>);

impl HostHandle {
    /// Wraps a host implementation.
    #[must_use]
    pub fn new(host: impl Host + 'static) -> Self {
        Self(Arc::new(host))
    }

    /// Wraps an already shared host.
    #[must_use]
    pub fn from_arc(host: Arc<dyn Host>) -> Self {
        Self(host)
    }
}

impl Default for HostHandle {
    fn default() -> Self {
        Self::new(NoHost)
    }
}

impl Deref for HostHandle {
    type Target = dyn Host;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Debug for HostHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostHandle")
    }
}
