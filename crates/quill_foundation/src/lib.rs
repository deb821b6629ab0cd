//! Core values, entity references, execution context, and errors for Quill.
//!
//! This crate provides:
//! - [`Value`] - The runtime value produced by executing a node
//! - [`ValueType`] - Declared result types and placeholder type hints
//! - [`Category`] - Grammar categories the element registry parses into
//! - [`EntityRef`] - Opaque host entity references
//! - [`Context`] - Per-invocation execution context
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod entity;
pub mod error;
pub mod types;
pub mod value;

pub use context::Context;
pub use entity::EntityRef;
pub use error::{Error, ErrorContext, ErrorKind, EvaluationError};
pub use types::{Category, ValueType};
pub use value::Value;

/// Result alias used throughout Quill.
pub type Result<T> = std::result::Result<T, Error>;
