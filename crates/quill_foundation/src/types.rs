//! Value types and grammar categories.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The semantic type a node produces.
///
/// Also used as the type hint carried by pattern placeholders, where
/// [`ValueType::Any`] stands for an untyped placeholder.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValueType {
    /// 64-bit floating point number.
    Number,
    /// Text.
    Text,
    /// Boolean.
    Boolean,
    /// Reference to a host entity.
    Entity,
    /// Calendar date and time.
    Date,
    /// No value (effects).
    Void,
    /// Any type (untyped placeholder).
    Any,
}

impl ValueType {
    /// Resolves a placeholder hint name (`%number%`, `%entity%`, ...).
    ///
    /// Returns `None` for unknown hints.
    #[must_use]
    pub fn from_hint(hint: &str) -> Option<Self> {
        let ty = match hint.trim().to_ascii_lowercase().as_str() {
            "number" | "numbers" | "integer" => Self::Number,
            "text" | "texts" | "string" | "strings" => Self::Text,
            "boolean" | "booleans" => Self::Boolean,
            "entity" | "entities" | "player" | "players" | "commandsender" | "commandsenders" => {
                Self::Entity
            }
            "date" | "dates" => Self::Date,
            "object" | "objects" => Self::Any,
            _ => return None,
        };
        Some(ty)
    }

    /// Returns true if this type is `Any`.
    #[must_use]
    pub const fn is_any(self) -> bool {
        matches!(self, Self::Any)
    }

    /// Checks if a node declaring `actual` may fill a slot of this type.
    ///
    /// `Any` accepts every value-producing type, but no slot accepts `Void`.
    #[must_use]
    pub fn accepts(self, actual: ValueType) -> bool {
        match (self, actual) {
            (_, Self::Void) => false,
            (Self::Any, _) | (_, Self::Any) => true,
            (expected, actual) => expected == actual,
        }
    }

    /// Grammar categories to try, in order, when parsing a placeholder of this type.
    #[must_use]
    pub const fn categories(self) -> &'static [Category] {
        match self {
            Self::Number | Self::Date => &[Category::Function, Category::Expression],
            Self::Boolean => &[Category::Condition, Category::Expression],
            Self::Text | Self::Entity | Self::Any | Self::Void => {
                &[Category::Expression, Category::Function]
            }
        }
    }
}

impl fmt::Debug for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Text => write!(f, "text"),
            Self::Boolean => write!(f, "boolean"),
            Self::Entity => write!(f, "entity"),
            Self::Date => write!(f, "date"),
            Self::Void => write!(f, "void"),
            Self::Any => write!(f, "object"),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Grammar category an element registry parses a line into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    /// Boolean-typed checks (`Steve is on ground`).
    Condition,
    /// Void-typed actions (`feed the player`).
    Effect,
    /// Value-producing phrases, optionally mutable via capability facets.
    Expression,
    /// Call-syntax functions (`abs(-5)`).
    Function,
}

impl Category {
    /// All categories in registry order.
    pub const ALL: [Category; 4] = [
        Category::Condition,
        Category::Effect,
        Category::Expression,
        Category::Function,
    ];

    /// Returns the lowercase category name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Condition => "condition",
            Self::Effect => "effect",
            Self::Expression => "expression",
            Self::Function => "function",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
