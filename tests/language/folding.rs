//! Constant folding tests.

use proptest::prelude::*;
use quill_foundation::{Category, Context, EntityRef, Value, ValueType};
use quill_language::{ElementRegistry, HostHandle, NodeKind, NodeState, ParserConfig};

fn registry() -> ElementRegistry {
    ElementRegistry::standard(HostHandle::default()).unwrap()
}

#[test]
fn abs_of_negative_five() {
    let node = registry()
        .parse_hinted(ValueType::Number, "abs(-5)", 1)
        .unwrap();
    assert!(matches!(node.state(), NodeState::Computed(Value::Number(n)) if *n == 5.0));
    assert!(node.children().is_empty());
}

#[test]
fn atan_of_one() {
    let node = registry().force_parse(Category::Function, "atan(1)", 1).unwrap();
    let value = node.computed().and_then(Value::as_number).unwrap();
    assert!((value - 0.785_398_163_397_448_3).abs() < f64::EPSILON);
}

#[test]
fn folded_value_is_stable() {
    let node = registry()
        .force_parse(Category::Function, "log(abs(-1000))", 1)
        .unwrap();
    let first = node.execute(None).unwrap();
    for _ in 0..10 {
        assert_eq!(node.execute(None).unwrap(), first);
    }
}

#[test]
fn effects_stay_unevaluated_around_folded_arguments() {
    let node = registry()
        .force_parse(Category::Effect, "feed the player by abs(-3)", 1)
        .unwrap();
    assert!(!node.is_folded());
    assert!(matches!(node.kind(), NodeKind::Feed(_)));

    let [player, amount] = node.children() else {
        panic!("feed should have two children");
    };
    assert!(!player.is_folded());
    assert_eq!(amount.computed(), Some(&Value::Number(3.0)));
}

#[test]
fn function_of_a_role_is_not_folded() {
    let node = registry()
        .force_parse(Category::Condition, "the player is on the ground", 1)
        .unwrap();
    assert!(!node.is_folded());
}

#[test]
fn folding_can_be_switched_off() {
    let registry = ElementRegistry::standard_with_config(
        HostHandle::default(),
        ParserConfig::without_folding(),
    )
    .unwrap();
    let node = registry
        .force_parse(Category::Function, "abs(abs(-5))", 1)
        .unwrap();
    assert!(!node.is_folded());
    assert!(!node.children()[0].is_folded());
    assert_eq!(node.execute(None).unwrap(), Value::Number(5.0));
}

#[test]
fn fold_failure_is_a_parse_failure() {
    let err = registry()
        .force_parse(Category::Function, "date(2019, 13, 40)", 3)
        .unwrap_err();
    assert!(err.is_evaluation());
    let context = err.context.unwrap();
    assert!(context.stack.iter().any(|frame| frame.starts_with("date")));
}

#[test]
fn folded_nodes_ignore_the_context() {
    let node = registry()
        .force_parse(Category::Function, "date(2019, 3, 14)", 1)
        .unwrap();
    let steve = Context::new(1).with_role("player", EntityRef::new("Steve"));
    let alex = Context::new(99).with_role("sender", EntityRef::new("Alex"));

    let absent = node.execute(None).unwrap();
    assert_eq!(node.execute(Some(&steve)).unwrap(), absent);
    assert_eq!(node.execute(Some(&alex)).unwrap(), absent);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn folding_is_idempotent_across_contexts(
        n in -1000..1000i32,
        year in 1970..2100i32,
        month in 1..=12u32,
        day in 1..=28u32,
        line in 1..10_000usize,
        name in "[A-Za-z0-9_]{1,16}",
    ) {
        let folding = registry();
        let plain = ElementRegistry::standard_with_config(
            HostHandle::default(),
            ParserConfig::without_folding(),
        )
        .unwrap();
        let ctx = Context::new(line)
            .with_role("player", EntityRef::new(name.clone()))
            .with_role("sender", EntityRef::new(name));

        for text in [
            format!("abs(abs({n}))"),
            format!("date({year}, {month}, abs(-{day}))"),
        ] {
            let folded = folding.force_parse(Category::Function, &text, line).unwrap();
            let unfolded = plain.force_parse(Category::Function, &text, line).unwrap();
            prop_assert!(folded.is_folded());
            prop_assert!(!unfolded.is_folded());

            let absent = folded.execute(None).unwrap();
            prop_assert_eq!(&folded.execute(Some(&ctx)).unwrap(), &absent);
            prop_assert_eq!(&folded.execute(Some(&ctx)).unwrap(), &absent);
            prop_assert_eq!(&unfolded.execute(Some(&ctx)).unwrap(), &absent);
        }
    }
}
