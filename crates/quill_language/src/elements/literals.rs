//! Constant literals.

use quill_foundation::{Category, EntityRef, Error, Result, Value, ValueType};

use crate::node::Node;
use crate::registry::{ElementRegistry, FactoryInput};

pub(super) fn register(registry: &mut ElementRegistry) -> Result<()> {
    registry.register_element(
        Category::Expression,
        "number",
        ValueType::Number,
        &["<-?\\d+(\\.\\d+)?>"],
        number,
    )?;
    registry.register_element(
        Category::Expression,
        "text",
        ValueType::Text,
        &["\"<[^\"]*>\""],
        text,
    )?;
    registry.register_element(
        Category::Expression,
        "boolean",
        ValueType::Boolean,
        &["<true|false|yes|no|on|off>"],
        boolean,
    )?;
    Ok(())
}

/// Bare names such as `Steve`; registered after every other expression.
pub(super) fn register_entity_names(registry: &mut ElementRegistry) -> Result<()> {
    registry.register_element(
        Category::Expression,
        "entity name",
        ValueType::Entity,
        &["<[A-Za-z0-9_]{1,16}>"],
        entity_name,
    )
}

fn captured<'i>(input: &'i FactoryInput<'_>) -> Result<&'i str> {
    input
        .text(0)
        .ok_or_else(|| Error::invalid_argument("literal captured nothing"))
}

fn number(input: &FactoryInput<'_>) -> Result<Node> {
    let text = captured(input)?;
    let value: f64 = text
        .parse()
        .map_err(|_| Error::invalid_argument(format!("`{text}` is not a number")))?;
    Ok(input.constant(Value::Number(value)))
}

fn text(input: &FactoryInput<'_>) -> Result<Node> {
    Ok(input.constant(Value::text(captured(input)?)))
}

fn boolean(input: &FactoryInput<'_>) -> Result<Node> {
    let value = matches!(
        captured(input)?.to_ascii_lowercase().as_str(),
        "true" | "yes" | "on"
    );
    Ok(input.constant(Value::Boolean(value)))
}

fn entity_name(input: &FactoryInput<'_>) -> Result<Node> {
    Ok(input.constant(Value::Entity(EntityRef::new(captured(input)?))))
}
