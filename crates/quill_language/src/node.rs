//! AST nodes.
//!
//! A [`Node`] is either still waiting for its children to be evaluated, or
//! already holds the value it computed at parse time. Folding (see
//! [`crate::fold`]) moves a node from the first state to the second and drops
//! its children; it never goes back.
//!
//! ```text
//! abs(abs(-5))    Unevaluated{[Unevaluated{[Computed(-5)]}]}
//!      │  fold inner
//!      ▼
//!                 Unevaluated{[Computed(5)]}
//!      │  fold outer
//!      ▼
//!                 Computed(5)
//! ```

use quill_foundation::{Context, Error, Result, Value, ValueType};

use crate::capability::{Capabilities, ChangeMode};
use crate::fold;
use crate::kind::NodeKind;

/// Evaluation state of a node.
#[derive(Clone, Debug)]
pub enum NodeState {
    /// Children still need evaluating on every execution.
    Unevaluated {
        /// Owned child nodes, positional per kind
        children: Vec<Node>,
    },
    /// The value was fixed at parse time.
    Computed(Value),
}

/// One node of a parsed script.
///
/// Nodes are immutable once built and can be executed any number of times,
/// from any number of threads.
#[derive(Clone, Debug)]
pub struct Node {
    kind: NodeKind,
    value_type: ValueType,
    line: usize,
    state: NodeState,
}

impl Node {
    /// Builds a node, folding it right away when `fold_constants` is set and
    /// the kind and children allow it.
    ///
    /// # Errors
    /// Returns the evaluation error if folding fails (for example `date(2019, 13, 1)`).
    pub fn new(kind: NodeKind, children: Vec<Node>, line: usize, fold_constants: bool) -> Result<Self> {
        let node = Self {
            value_type: kind.value_type(),
            kind,
            line,
            state: NodeState::Unevaluated { children },
        };
        if fold_constants && fold::is_foldable(&node) {
            fold::fold(node)
        } else {
            Ok(node)
        }
    }

    /// Builds an already computed constant node.
    #[must_use]
    pub fn constant(value: Value, line: usize) -> Self {
        Self {
            value_type: value.value_type(),
            kind: NodeKind::Literal(value.clone()),
            line,
            state: NodeState::Computed(value),
        }
    }

    pub(crate) fn into_computed(self, value: Value) -> Self {
        Self {
            state: NodeState::Computed(value),
            ..self
        }
    }

    /// The node's kind.
    #[must_use]
    pub const fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The declared result type.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// The source line the node was parsed from.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// The evaluation state.
    #[must_use]
    pub const fn state(&self) -> &NodeState {
        &self.state
    }

    /// Child nodes; empty once folded.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match &self.state {
            NodeState::Unevaluated { children } => children,
            NodeState::Computed(_) => &[],
        }
    }

    /// The parse-time value, if this node was folded.
    #[must_use]
    pub const fn computed(&self) -> Option<&Value> {
        match &self.state {
            NodeState::Computed(value) => Some(value),
            NodeState::Unevaluated { .. } => None,
        }
    }

    /// Returns true if the node holds a parse-time value.
    #[must_use]
    pub const fn is_folded(&self) -> bool {
        matches!(self.state, NodeState::Computed(_))
    }

    /// Evaluates the node.
    ///
    /// A computed node returns its stored value without consulting `ctx`.
    /// `ctx` is `None` only while folding.
    ///
    /// # Errors
    /// Returns any evaluation or host error raised by this node or its
    /// children, with a frame naming this node appended.
    pub fn execute(&self, ctx: Option<&Context>) -> Result<Value> {
        match &self.state {
            NodeState::Computed(value) => Ok(value.clone()),
            NodeState::Unevaluated { children } => self
                .kind
                .evaluate(children, ctx)
                .map_err(|e| e.with_frame(format!("{} (line {})", self.kind.name(), self.line))),
        }
    }

    /// The change operations this node supports.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.kind.capabilities()
    }

    /// Returns true if the node supports every operation in `capability`.
    #[must_use]
    pub const fn has(&self, capability: Capabilities) -> bool {
        self.capabilities().contains(capability)
    }

    /// Fails unless the node supports the change.
    ///
    /// # Errors
    /// Returns an unsupported-capability error naming the node.
    pub fn require(&self, mode: ChangeMode) -> Result<()> {
        if self.has(mode.capability()) {
            Ok(())
        } else {
            Err(Error::unsupported_capability(mode.participle(), self.kind.name()))
        }
    }

    /// Applies a change, evaluating `value` first when present.
    ///
    /// # Errors
    /// Fails if the node lacks the capability, the value fails to evaluate,
    /// or the host rejects the change.
    pub fn change(&self, ctx: Option<&Context>, mode: ChangeMode, value: Option<&Node>) -> Result<()> {
        self.require(mode)?;
        let value = value.map(|node| node.execute(ctx)).transpose()?;
        match &self.kind {
            NodeKind::FakeMaxPlayers(host) => host.change_fake_max_players(mode, value.as_ref()),
            _ => Err(Error::unsupported_capability(mode.participle(), self.kind.name())),
        }
    }

    /// `add <value> to <self>`
    ///
    /// # Errors
    /// See [`Node::change`].
    pub fn add(&self, ctx: Option<&Context>, value: &Node) -> Result<()> {
        self.change(ctx, ChangeMode::Add, Some(value))
    }

    /// `remove <value> from <self>`
    ///
    /// # Errors
    /// See [`Node::change`].
    pub fn remove(&self, ctx: Option<&Context>, value: &Node) -> Result<()> {
        self.change(ctx, ChangeMode::Remove, Some(value))
    }

    /// `set <self> to <value>`
    ///
    /// # Errors
    /// See [`Node::change`].
    pub fn set(&self, ctx: Option<&Context>, value: &Node) -> Result<()> {
        self.change(ctx, ChangeMode::Set, Some(value))
    }

    /// `reset <self>`
    ///
    /// # Errors
    /// See [`Node::change`].
    pub fn reset(&self, ctx: Option<&Context>) -> Result<()> {
        self.change(ctx, ChangeMode::Reset, None)
    }

    /// `delete <self>`
    ///
    /// # Errors
    /// See [`Node::change`].
    pub fn delete(&self, ctx: Option<&Context>) -> Result<()> {
        self.change(ctx, ChangeMode::Delete, None)
    }
}
