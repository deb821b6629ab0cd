//! Conditions.

use quill_foundation::{Category, Result, ValueType};

use crate::kind::NodeKind;
use crate::node::Node;
use crate::registry::{ElementRegistry, FactoryInput};

pub(super) fn register(registry: &mut ElementRegistry) -> Result<()> {
    registry.register_element(
        Category::Condition,
        "on ground",
        ValueType::Boolean,
        &[
            "%entity% (is|are) on [the] ground",
            "%entity% (isn't|is not|aren't|are not) on [the] ground",
        ],
        on_ground,
    )
}

fn on_ground(input: &FactoryInput<'_>) -> Result<Node> {
    let kind = NodeKind::IsOnGround {
        positive: input.pattern_index() == 0,
        host: input.host(),
    };
    input.node(kind, vec![input.child(0)?])
}
