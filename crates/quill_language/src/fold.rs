//! Parse-time constant folding.
//!
//! A node folds when its kind is pure and every child is already computed.
//! Folding evaluates the node once without an execution context, stores the
//! result, and drops the children. Because children are folded as they are
//! built, `abs(abs(-5))` collapses bottom-up into a single constant.
//!
//! Kinds that read the context (roles), ask the host (conditions, the shown
//! player limit) or cause side effects (effects) are never folded, even when
//! all of their children are constants.

use quill_foundation::Result;

use crate::kind::NodeKind;
use crate::node::{Node, NodeState};

/// Whether a kind's value depends only on its children.
#[must_use]
pub const fn is_pure(kind: &NodeKind) -> bool {
    match kind {
        NodeKind::Literal(_)
        | NodeKind::Abs
        | NodeKind::Atan
        | NodeKind::Ln
        | NodeKind::Log
        | NodeKind::Date => true,
        NodeKind::Role(_)
        | NodeKind::FakeMaxPlayers(_)
        | NodeKind::IsOnGround { .. }
        | NodeKind::Feed(_)
        | NodeKind::PlayerInfo { .. }
        | NodeKind::Command(_)
        | NodeKind::Change(_) => false,
    }
}

/// Whether `node` can be folded right now.
#[must_use]
pub fn is_foldable(node: &Node) -> bool {
    match node.state() {
        NodeState::Computed(_) => false,
        NodeState::Unevaluated { children } => {
            is_pure(node.kind()) && children.iter().all(Node::is_folded)
        }
    }
}

/// Evaluates a foldable node once and replaces it with a constant.
///
/// # Errors
/// Returns the evaluation error; the caller reports it as a parse failure
/// of the line being compiled.
pub(crate) fn fold(node: Node) -> Result<Node> {
    let value = node.execute(None)?;
    tracing::trace!(kind = %node.kind().name(), value = %value, line = node.line(), "folded");
    Ok(node.into_computed(value))
}
