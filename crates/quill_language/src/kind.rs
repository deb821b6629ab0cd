//! Node kinds and their evaluation rules.
//!
//! Every element the registry can build is one [`NodeKind`] variant. Child
//! nodes live in the owning [`Node`](crate::Node); optional children are
//! identified by position, so a kind's `evaluate` reads `children.get(i)`.

use chrono::NaiveDate;
use quill_foundation::{Context, EntityRef, Error, Result, Value, ValueType};

use crate::capability::{Capabilities, ChangeMode};
use crate::host::HostHandle;
use crate::node::Node;

/// What a node does when executed.
#[derive(Clone, Debug)]
pub enum NodeKind {
    /// A constant (number, text, boolean, or named entity).
    Literal(Value),
    /// The entity bound to a role in the execution context.
    Role(&'static str),
    /// The player limit shown in the server list. Children: none.
    FakeMaxPlayers(HostHandle),
    /// `abs(x)`
    Abs,
    /// `atan(x)`, radians
    Atan,
    /// `ln(x)`
    Ln,
    /// `log(x[, base])`, base 10 when omitted
    Log,
    /// `date(y, m, d[, h[, min[, s[, ms]]]])`
    Date,
    /// Whether an entity is on the ground. Children: entity.
    IsOnGround {
        /// False for the negated surface forms
        positive: bool,
        /// Answers the query
        host: HostHandle,
    },
    /// Restores hunger. Children: player, optional amount.
    Feed(HostHandle),
    /// Toggles player info in the server list. Children: none.
    PlayerInfo {
        /// True for show, false for hide
        show: bool,
        /// Applies the toggle
        host: HostHandle,
    },
    /// Dispatches a command. Children: command text, optional sender.
    Command(HostHandle),
    /// Applies a change to a target. Children: target, optional value.
    Change(ChangeMode),
}

impl NodeKind {
    /// Human-readable name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Literal(value) => format!("{} literal", value.value_type()),
            Self::Role(role) => format!("{role} reference"),
            Self::FakeMaxPlayers(_) => "fake max players".to_string(),
            Self::Abs => "abs function".to_string(),
            Self::Atan => "atan function".to_string(),
            Self::Ln => "ln function".to_string(),
            Self::Log => "log function".to_string(),
            Self::Date => "date function".to_string(),
            Self::IsOnGround { .. } => "on ground condition".to_string(),
            Self::Feed(_) => "feed effect".to_string(),
            Self::PlayerInfo { .. } => "player info effect".to_string(),
            Self::Command(_) => "command effect".to_string(),
            Self::Change(mode) => format!("{mode} effect"),
        }
    }

    /// The declared result type.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Literal(value) => value.value_type(),
            Self::Role(_) => ValueType::Entity,
            Self::FakeMaxPlayers(_) | Self::Abs | Self::Atan | Self::Ln | Self::Log => {
                ValueType::Number
            }
            Self::Date => ValueType::Date,
            Self::IsOnGround { .. } => ValueType::Boolean,
            Self::Feed(_) | Self::PlayerInfo { .. } | Self::Command(_) | Self::Change(_) => {
                ValueType::Void
            }
        }
    }

    /// The change operations this kind supports.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        match self {
            Self::FakeMaxPlayers(_) => Capabilities::ALL_CHANGES,
            _ => Capabilities::empty(),
        }
    }

    /// Computes this kind's value from its children.
    ///
    /// # Errors
    /// Propagates child failures, host failures, missing roles and
    /// argument errors.
    pub fn evaluate(&self, children: &[Node], ctx: Option<&Context>) -> Result<Value> {
        match self {
            Self::Literal(value) => Ok(value.clone()),
            Self::Role(role) => ctx
                .and_then(|ctx| ctx.entity(role))
                .cloned()
                .map(Value::Entity)
                .ok_or_else(|| Error::missing_role(*role)),
            Self::FakeMaxPlayers(host) => host.fake_max_players().map(Value::Number),
            Self::Abs => Ok(Value::Number(number(children, 0, ctx)?.abs())),
            Self::Atan => Ok(Value::Number(number(children, 0, ctx)?.atan())),
            Self::Ln => Ok(Value::Number(number(children, 0, ctx)?.ln())),
            Self::Log => {
                let x = number(children, 0, ctx)?;
                let base = optional_number(children, 1, ctx)?.unwrap_or(10.0);
                Ok(Value::Number(x.log10() / base.log10()))
            }
            Self::Date => date(children, ctx),
            Self::IsOnGround { positive, host } => {
                let entity = arg(children, 0)?.execute(ctx)?;
                let on_ground = host.is_on_ground(entity.expect_entity()?)?;
                Ok(Value::Boolean(on_ground == *positive))
            }
            Self::Feed(host) => {
                let player = arg(children, 0)?.execute(ctx)?;
                let amount = optional_number(children, 1, ctx)?;
                host.feed(player.expect_entity()?, amount)?;
                Ok(Value::Void)
            }
            Self::PlayerInfo { show, host } => {
                host.set_player_info_visible(*show)?;
                Ok(Value::Void)
            }
            Self::Command(host) => {
                let command = arg(children, 0)?.execute(ctx)?.to_text();
                let sender = command_sender(children, ctx)?;
                tracing::debug!(command = %command, sender = ?sender, "dispatching command");
                host.dispatch_command(sender.as_ref(), &command)?;
                Ok(Value::Void)
            }
            Self::Change(mode) => {
                arg(children, 0)?.change(ctx, *mode, children.get(1))?;
                Ok(Value::Void)
            }
        }
    }
}

/// Resolves the sender: explicit child, then the context's sender role.
///
/// `None` means the host should run the command as its console.
fn command_sender(children: &[Node], ctx: Option<&Context>) -> Result<Option<EntityRef>> {
    if let Some(sender) = children.get(1) {
        return Ok(Some(sender.execute(ctx)?.expect_entity()?.clone()));
    }
    Ok(ctx.and_then(|ctx| ctx.entity("sender")).cloned())
}

fn arg(children: &[Node], index: usize) -> Result<&Node> {
    children
        .get(index)
        .ok_or_else(|| Error::invalid_argument(format!("missing argument {}", index + 1)))
}

fn number(children: &[Node], index: usize, ctx: Option<&Context>) -> Result<f64> {
    arg(children, index)?.execute(ctx)?.expect_number()
}

fn optional_number(children: &[Node], index: usize, ctx: Option<&Context>) -> Result<Option<f64>> {
    children
        .get(index)
        .map(|child| child.execute(ctx)?.expect_number())
        .transpose()
}

/// Converts a date component, truncating toward zero.
#[allow(clippy::cast_possible_truncation)]
fn component(children: &[Node], index: usize, ctx: Option<&Context>) -> Result<i64> {
    let value = optional_number(children, index, ctx)?.unwrap_or(0.0);
    if value.is_finite() {
        Ok(value.trunc() as i64)
    } else {
        Err(Error::invalid_argument(format!("date component {value} is not finite")))
    }
}

fn date(children: &[Node], ctx: Option<&Context>) -> Result<Value> {
    let mut parts = [0_i64; 7];
    for (index, part) in parts.iter_mut().enumerate() {
        *part = component(children, index, ctx)?;
    }
    let [year, month, day, hour, minute, second, milli] = parts;

    let invalid = move || {
        Error::invalid_argument(format!(
            "date({year}, {month}, {day}, {hour}, {minute}, {second}, {milli}) is not a valid date"
        ))
    };
    let year = i32::try_from(year).map_err(|_| invalid())?;
    let [month, day, hour, minute, second, milli] =
        [month, day, hour, minute, second, milli].map(|part| u32::try_from(part).ok());
    let (Some(month), Some(day), Some(hour), Some(minute), Some(second), Some(milli)) =
        (month, day, hour, minute, second, milli)
    else {
        return Err(invalid());
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_milli_opt(hour, minute, second, milli))
        .map(Value::Date)
        .ok_or_else(invalid)
}
