//! Effects: statements executed for their side effects.

use quill_foundation::{Category, Result, ValueType};

use crate::capability::ChangeMode;
use crate::kind::NodeKind;
use crate::node::Node;
use crate::registry::{ElementRegistry, FactoryInput};

const SERVER_LIST: &str = "player [related] info[rmation] [(in|to|on|from) [the] server list]";

pub(super) fn register(registry: &mut ElementRegistry) -> Result<()> {
    registry.register_element(
        Category::Effect,
        "feed",
        ValueType::Void,
        &["feed [the] %entity% [by %number% [beef[s]]]"],
        feed,
    )?;
    let show = format!("(show|reveal) [all] {SERVER_LIST}");
    let hide = format!("hide [all] {SERVER_LIST}");
    registry.register_element(
        Category::Effect,
        "player info",
        ValueType::Void,
        &[show.as_str(), hide.as_str()],
        player_info,
    )?;
    registry.register_element(
        Category::Effect,
        "command",
        ValueType::Void,
        &[
            "[execute] [the] command %text% [by %entity%]",
            "[execute] [the] %entity% command %text%",
        ],
        command,
    )?;
    registry.register_element(
        Category::Effect,
        "change",
        ValueType::Void,
        &[
            "add %object% to %object%",
            "remove %object% from %object%",
            "set %object% to %object%",
            "reset %object%",
            "(delete|clear) %object%",
        ],
        change,
    )
}

fn feed(input: &FactoryInput<'_>) -> Result<Node> {
    let mut children = vec![input.child(0)?];
    children.extend(input.optional_child(1)?);
    input.node(NodeKind::Feed(input.host()), children)
}

fn player_info(input: &FactoryInput<'_>) -> Result<Node> {
    let kind = NodeKind::PlayerInfo {
        show: input.pattern_index() == 0,
        host: input.host(),
    };
    input.node(kind, Vec::new())
}

/// Children are always `[command, sender?]`, whichever form matched.
fn command(input: &FactoryInput<'_>) -> Result<Node> {
    let children = if input.pattern_index() == 0 {
        let mut children = vec![input.child(0)?];
        children.extend(input.optional_child(1)?);
        children
    } else {
        let sender = input.child(0)?;
        vec![input.child(1)?, sender]
    };
    input.node(NodeKind::Command(input.host()), children)
}

/// Children are `[target, value?]`; the target's capability is checked here
/// so an unsupported change never makes it into a compiled script.
fn change(input: &FactoryInput<'_>) -> Result<Node> {
    let (mode, target_slot, value_slot) = match input.pattern_index() {
        0 => (ChangeMode::Add, 1, Some(0)),
        1 => (ChangeMode::Remove, 1, Some(0)),
        2 => (ChangeMode::Set, 0, Some(1)),
        3 => (ChangeMode::Reset, 0, None),
        _ => (ChangeMode::Delete, 0, None),
    };

    let target = input.child(target_slot)?;
    target.require(mode)?;

    let mut children = vec![target];
    if let Some(slot) = value_slot {
        children.push(input.child(slot)?);
    }
    input.node(NodeKind::Change(mode), children)
}
