//! Pattern mini-language compiler and backtracking matcher for Quill.
//!
//! Script elements describe their surface forms with a small pattern
//! language:
//!
//! ```text
//! feed [the] %entity% [by %number% [beef[s]]]
//! │     │     │         │
//! │     │     │         └─ optional group, nests freely
//! │     │     └─ placeholder, later parsed as an entity expression
//! │     └─ optional literal
//! └─ literal (case-insensitive, whitespace-normalised)
//!
//! (show|reveal) player info       alternation, branches tried in order
//! <-?\d+(\.\d+)?>                 inline regex capture
//! ```
//!
//! # Modules
//!
//! - [`pattern`] - Compiled pattern representation
//! - [`compiler`] - Pattern specification compiler
//! - [`matcher`] - Backtracking matcher and match results

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compiler;
pub mod matcher;
pub mod pattern;


// Re-export main types for convenience
pub use compiler::PatternCompiler;
pub use matcher::{Capture, CaptureKind, Match, PatternMatcher, normalize};
pub use pattern::{Pattern, Segment};
