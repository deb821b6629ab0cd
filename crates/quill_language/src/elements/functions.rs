//! Pure math and date functions.
//!
//! All of these fold when their arguments are constants.

use quill_foundation::{Category, Result, ValueType};

use crate::kind::NodeKind;
use crate::node::Node;
use crate::registry::{ElementRegistry, FactoryInput};

pub(super) fn register(registry: &mut ElementRegistry) -> Result<()> {
    registry.register_element(
        Category::Function,
        "abs",
        ValueType::Number,
        &["abs\\(%number%\\)"],
        abs,
    )?;
    registry.register_element(
        Category::Function,
        "atan",
        ValueType::Number,
        &["atan\\(%number%\\)"],
        atan,
    )?;
    registry.register_element(
        Category::Function,
        "ln",
        ValueType::Number,
        &["ln\\(%number%\\)"],
        ln,
    )?;
    registry.register_element(
        Category::Function,
        "log",
        ValueType::Number,
        &["log\\(%number%[, %number%]\\)"],
        log,
    )?;
    // Two trailing arguments (zone and DST offset) are accepted and ignored.
    registry.register_element(
        Category::Function,
        "date",
        ValueType::Date,
        &["date\\(%number%, %number%, %number%[, %number%[, %number%[, %number%[, %number%[, %number%[, %number%]]]]]]\\)"],
        date,
    )
}

/// Parses every present argument slot, stopping at the first absent one.
fn arguments(input: &FactoryInput<'_>, limit: usize) -> Result<Vec<Node>> {
    let mut children = Vec::new();
    for slot in 0..limit {
        match input.optional_child(slot)? {
            Some(child) => children.push(child),
            None => break,
        }
    }
    Ok(children)
}

fn abs(input: &FactoryInput<'_>) -> Result<Node> {
    input.node(NodeKind::Abs, vec![input.child(0)?])
}

fn atan(input: &FactoryInput<'_>) -> Result<Node> {
    input.node(NodeKind::Atan, vec![input.child(0)?])
}

fn ln(input: &FactoryInput<'_>) -> Result<Node> {
    input.node(NodeKind::Ln, vec![input.child(0)?])
}

fn log(input: &FactoryInput<'_>) -> Result<Node> {
    input.node(NodeKind::Log, arguments(input, 2)?)
}

fn date(input: &FactoryInput<'_>) -> Result<Node> {
    input.node(NodeKind::Date, arguments(input, 7)?)
}
