//! Quill - pattern-driven parser and interpreter for natural-language scripts
//!
//! This crate re-exports all layers of the Quill system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: quill_language   - Element registry, AST nodes, folding, scripts
//! Layer 1: quill_pattern    - Pattern compiler and backtracking matcher
//! Layer 0: quill_foundation - Core types (Value, EntityRef, Context, Error)
//! ```

pub use quill_foundation as foundation;
pub use quill_language as language;
pub use quill_pattern as pattern;
