//! Pattern compilation tests.

use quill_foundation::{ErrorKind, ValueType};
use quill_pattern::{CaptureKind, PatternCompiler, Segment};

#[test]
fn skript_style_patterns_compile() {
    for spec in [
        "feed [the] %entity% [by %number% [beef[s]]]",
        "(show|reveal) [all] player [related] info[rmation] [(in|to|on|from) [the] server list]",
        "[the] [fake|shown|displayed] max[imum] (count|amount|number|size) of players",
        "%entity% (isn't|is not|aren't|are not) on [the] ground",
        "<-?\\d+(\\.\\d+)?>",
    ] {
        assert!(PatternCompiler::compile(spec).is_ok(), "{spec}");
    }
}

#[test]
fn slots_follow_textual_order() {
    let pattern = PatternCompiler::compile("[execute] [the] command %text% [by %entity%]").unwrap();
    assert_eq!(
        pattern.slots,
        vec![
            CaptureKind::Placeholder(ValueType::Text),
            CaptureKind::Placeholder(ValueType::Entity),
        ]
    );
}

#[test]
fn escapes_produce_literals() {
    let pattern = PatternCompiler::compile("100\\% \\[sure\\]").unwrap();
    assert!(pattern.is_fixed());
    assert!(matches!(
        pattern.segments.as_slice(),
        [Segment::Literal(text)] if text == "100% [sure]"
    ));
}

#[test]
fn errors_carry_the_pattern() {
    let err = PatternCompiler::compile("feed [the %entity%").unwrap_err();
    let ErrorKind::PatternSyntax { pattern, .. } = &err.kind else {
        panic!("expected pattern syntax error, got {err}");
    };
    assert_eq!(pattern, "feed [the %entity%");
}
