//! Context and host expressions.

use quill_foundation::{Category, Result, ValueType};

use crate::kind::NodeKind;
use crate::node::Node;
use crate::registry::{ElementRegistry, FactoryInput};

pub(super) fn register(registry: &mut ElementRegistry) -> Result<()> {
    registry.register_element(
        Category::Expression,
        "player",
        ValueType::Entity,
        &["[the] player"],
        player,
    )?;
    registry.register_element(
        Category::Expression,
        "sender",
        ValueType::Entity,
        &["[the] [command] sender"],
        sender,
    )?;
    registry.register_element(
        Category::Expression,
        "fake max players",
        ValueType::Number,
        &[
            "[the] (fake|shown|displayed) max[imum] player[s] [count|amount|number|size]",
            "[the] [fake|shown|displayed] max[imum] (count|amount|number|size) of players",
        ],
        fake_max_players,
    )
}

fn player(input: &FactoryInput<'_>) -> Result<Node> {
    input.node(NodeKind::Role("player"), Vec::new())
}

fn sender(input: &FactoryInput<'_>) -> Result<Node> {
    input.node(NodeKind::Role("sender"), Vec::new())
}

fn fake_max_players(input: &FactoryInput<'_>) -> Result<Node> {
    input.node(NodeKind::FakeMaxPlayers(input.host()), Vec::new())
}
