//! Element registry, AST nodes, constant folding, and script execution for Quill.
//!
//! This crate turns script lines into executable node trees:
//!
//! ```text
//! "feed the player by abs(-3)"
//!        │
//!        ▼  ElementRegistry::force_parse(Effect, ..)
//! Feed ─┬─ Role("player")          resolved per execution
//!       └─ Computed(3)             abs(-3) folded while parsing
//!        │
//!        ▼  Node::execute(Some(&ctx))
//! Host::feed(Steve, Some(3.0))
//! ```
//!
//! # Modules
//!
//! - [`registry`] - Factories per grammar category and recursive parsing
//! - [`elements`] - Built-in literals, expressions, functions, conditions and effects
//! - [`node`] - AST nodes and their evaluation state
//! - [`kind`] - Node kinds and evaluation rules
//! - [`fold`] - Parse-time constant folding policy
//! - [`capability`] - Mutation facets (add, remove, set, reset, delete)
//! - [`host`] - The boundary to the embedding application
//! - [`script`] - Compiled constructs
//! - [`config`] - Parser options

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod capability;
pub mod config;
pub mod elements;
pub mod fold;
pub mod host;
pub mod kind;
pub mod node;
pub mod registry;
pub mod script;


pub use capability::{Capabilities, ChangeMode};
pub use config::ParserConfig;
pub use host::{Host, HostHandle, NoHost};
pub use kind::NodeKind;
pub use node::{Node, NodeState};
pub use registry::{BuildFn, ElementRegistry, Factory, FactoryInput};
pub use script::{CompiledScript, Statement};
