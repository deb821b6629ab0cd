//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, EntityRef, Context, and Error.

mod context;
mod errors;
mod values;
