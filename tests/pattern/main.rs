//! Integration tests for Layer 1: Pattern
//!
//! Tests for the pattern compiler and the backtracking matcher.

mod compiling;
mod matching;
