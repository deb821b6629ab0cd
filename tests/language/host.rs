//! Host boundary tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use quill_foundation::{Category, Context, EntityRef, ErrorKind, Result, Value, ValueType};
use quill_language::{ChangeMode, ElementRegistry, Host, HostHandle};

/// A world whose ground state changes between executions.
#[derive(Default)]
struct World {
    grounded: AtomicBool,
    limit: Mutex<f64>,
}

impl Host for World {
    fn is_on_ground(&self, _entity: &EntityRef) -> Result<bool> {
        Ok(self.grounded.load(Ordering::SeqCst))
    }

    fn fake_max_players(&self) -> Result<f64> {
        Ok(*self.limit.lock().unwrap())
    }

    fn change_fake_max_players(&self, mode: ChangeMode, value: Option<&Value>) -> Result<()> {
        let mut limit = self.limit.lock().unwrap();
        let amount = value.map(Value::expect_number).transpose()?.unwrap_or(0.0);
        *limit = match mode {
            ChangeMode::Add => *limit + amount,
            ChangeMode::Remove => *limit - amount,
            ChangeMode::Set => amount,
            ChangeMode::Reset | ChangeMode::Delete => 20.0,
        };
        Ok(())
    }
}

fn world() -> (std::sync::Arc<World>, ElementRegistry) {
    let world = std::sync::Arc::new(World::default());
    let registry = ElementRegistry::standard(HostHandle::from_arc(world.clone())).unwrap();
    (world, registry)
}

#[test]
fn conditions_are_evaluated_every_time() {
    let (world, registry) = world();
    let node = registry
        .force_parse(Category::Condition, "Steve is on ground", 1)
        .unwrap();
    let negated = registry
        .force_parse(Category::Condition, "Steve isn't on ground", 1)
        .unwrap();

    let steve = Value::Entity(EntityRef::new("Steve"));
    for condition in [&node, &negated] {
        assert_eq!(condition.value_type(), ValueType::Boolean);
        assert_eq!(condition.children()[0].computed(), Some(&steve));
    }

    assert_eq!(node.execute(None).unwrap(), Value::Boolean(false));
    assert_eq!(negated.execute(None).unwrap(), Value::Boolean(true));

    world.grounded.store(true, Ordering::SeqCst);
    assert_eq!(node.execute(None).unwrap(), Value::Boolean(true));
    assert_eq!(negated.execute(None).unwrap(), Value::Boolean(false));
}

#[test]
fn fake_max_players_round_trip() {
    let (_, registry) = world();
    let ctx = Context::new(1);
    let read = registry
        .force_parse(Category::Expression, "the fake max players", 1)
        .unwrap();

    for line in [
        "set the fake max players to 10",
        "add 5 to the shown max players",
        "remove 3 from the displayed maximum players",
    ] {
        registry
            .force_parse(Category::Effect, line, 1)
            .unwrap()
            .execute(Some(&ctx))
            .unwrap();
    }
    assert_eq!(read.execute(Some(&ctx)).unwrap(), Value::Number(12.0));

    registry
        .force_parse(Category::Effect, "reset the fake max players", 2)
        .unwrap()
        .execute(Some(&ctx))
        .unwrap();
    assert_eq!(read.execute(Some(&ctx)).unwrap(), Value::Number(20.0));
}

#[test]
fn unsupported_host_operation_is_reported() {
    let (_, registry) = world();
    let node = registry
        .force_parse(Category::Effect, "feed Steve", 1)
        .unwrap();
    let err = node.execute(None).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnimplementedOperation(ref op) if op == "feed effect"));
}

#[test]
fn host_errors_propagate_through_change() {
    let (_, registry) = world();
    let node = registry
        .force_parse(Category::Effect, "set the fake max players to \"many\"", 1)
        .unwrap();
    let err = node.execute(None).unwrap_err();
    assert!(err.is_evaluation());
}
