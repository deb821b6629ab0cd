//! Runtime values produced by executing nodes.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::Result;
use crate::entity::EntityRef;
use crate::error::Error;
use crate::types::ValueType;

/// Runtime value produced by executing a node.
///
/// Values are immutable and cheaply cloneable.
#[derive(Clone)]
pub enum Value {
    /// The result of an effect.
    Void,
    /// 64-bit floating point number.
    Number(f64),
    /// Text value.
    Text(Arc<str>),
    /// Boolean value.
    Boolean(bool),
    /// Entity reference.
    Entity(EntityRef),
    /// Calendar date and time.
    Date(NaiveDateTime),
}

impl Value {
    /// Creates a text value.
    #[must_use]
    pub fn text(s: impl Into<Arc<str>>) -> Self {
        Self::Text(s.into())
    }

    /// Returns the type of this value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Void => ValueType::Void,
            Self::Number(_) => ValueType::Number,
            Self::Text(_) => ValueType::Text,
            Self::Boolean(_) => ValueType::Boolean,
            Self::Entity(_) => ValueType::Entity,
            Self::Date(_) => ValueType::Date,
        }
    }

    /// Attempts to extract a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract a text reference.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract an entity reference.
    #[must_use]
    pub const fn as_entity(&self) -> Option<&EntityRef> {
        match self {
            Self::Entity(e) => Some(e),
            _ => None,
        }
    }

    /// Attempts to extract a date.
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Extracts a number or fails with a type mismatch.
    ///
    /// # Errors
    /// Returns an evaluation error if this value is not a number.
    pub fn expect_number(&self) -> Result<f64> {
        self.as_number()
            .ok_or_else(|| Error::type_mismatch(ValueType::Number, self.value_type()))
    }

    /// Extracts a boolean or fails with a type mismatch.
    ///
    /// # Errors
    /// Returns an evaluation error if this value is not a boolean.
    pub fn expect_bool(&self) -> Result<bool> {
        self.as_bool()
            .ok_or_else(|| Error::type_mismatch(ValueType::Boolean, self.value_type()))
    }

    /// Extracts an entity reference or fails with a type mismatch.
    ///
    /// # Errors
    /// Returns an evaluation error if this value is not an entity.
    pub fn expect_entity(&self) -> Result<&EntityRef> {
        self.as_entity()
            .ok_or_else(|| Error::type_mismatch(ValueType::Entity, self.value_type()))
    }

    /// Converts this value to text the way commands and messages see it.
    ///
    /// Whole numbers render without a fractional part.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

// Implement PartialEq manually to handle float comparison
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Void, Self::Void) => true,
            (Self::Number(a), Self::Number(b)) => a.to_bits() == b.to_bits(),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Entity(a), Self::Entity(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => write!(f, "void"),
            Self::Number(n) => write!(f, "{n:?}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Entity(e) => write!(f, "{e:?}"),
            Self::Date(d) => write!(f, "Date({d})"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => Ok(()),
            #[allow(clippy::cast_possible_truncation)]
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Entity(e) => write!(f, "{e}"),
            Self::Date(d) => write!(f, "{d}"),
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.into())
    }
}

impl From<EntityRef> for Value {
    fn from(e: EntityRef) -> Self {
        Self::Entity(e)
    }
}
