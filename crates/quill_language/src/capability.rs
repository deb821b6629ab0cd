//! Mutation facets a node may support.
//!
//! Capabilities are declared per node kind and checked when a change effect
//! binds its target, so `set player to 5` is rejected while parsing rather
//! than on first execution.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// The set of change operations a node accepts.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Capabilities: u8 {
        /// `add X to <node>`
        const ADDABLE = 1 << 0;
        /// `delete <node>` / `clear <node>`
        const DELETABLE = 1 << 1;
        /// `remove X from <node>`
        const REMOVABLE = 1 << 2;
        /// `reset <node>`
        const RESETTABLE = 1 << 3;
        /// `set <node> to X`
        const SETTABLE = 1 << 4;

        /// Everything a host-backed setting usually supports.
        const ALL_CHANGES = Self::ADDABLE.bits()
            | Self::DELETABLE.bits()
            | Self::REMOVABLE.bits()
            | Self::RESETTABLE.bits()
            | Self::SETTABLE.bits();
    }
}

/// One change operation, as requested by a change effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeMode {
    /// Increase by a value.
    Add,
    /// Decrease by a value.
    Remove,
    /// Replace with a value.
    Set,
    /// Restore the default.
    Reset,
    /// Clear entirely.
    Delete,
}

impl ChangeMode {
    /// The capability a target must declare to accept this change.
    #[must_use]
    pub const fn capability(self) -> Capabilities {
        match self {
            Self::Add => Capabilities::ADDABLE,
            Self::Remove => Capabilities::REMOVABLE,
            Self::Set => Capabilities::SETTABLE,
            Self::Reset => Capabilities::RESETTABLE,
            Self::Delete => Capabilities::DELETABLE,
        }
    }

    /// Whether the change carries a value operand.
    #[must_use]
    pub const fn takes_value(self) -> bool {
        matches!(self, Self::Add | Self::Remove | Self::Set)
    }

    /// Past participle used in diagnostics ("cannot be set").
    #[must_use]
    pub const fn participle(self) -> &'static str {
        match self {
            Self::Add => "added to",
            Self::Remove => "removed from",
            Self::Set => "set",
            Self::Reset => "reset",
            Self::Delete => "deleted",
        }
    }
}

impl fmt::Display for ChangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Set => "set",
            Self::Reset => "reset",
            Self::Delete => "delete",
        };
        write!(f, "{name}")
    }
}
