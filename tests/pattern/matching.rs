//! Pattern matching tests.

use quill_pattern::{PatternCompiler, PatternMatcher, normalize};

fn compile(spec: &str) -> quill_pattern::Pattern {
    PatternCompiler::compile(spec).unwrap()
}

// =============================================================================
// Whole-line matching
// =============================================================================

#[test]
fn feed_forms() {
    let pattern = compile("feed [the] %entity% [by %number% [beef[s]]]");

    let m = PatternMatcher::matches(&pattern, "feed the player by 3").unwrap();
    assert_eq!(m.text(0), Some("player"));
    assert_eq!(m.text(1), Some("3"));

    let m = PatternMatcher::matches(&pattern, "  FEED   Steve  ").unwrap();
    assert_eq!(m.text(0), Some("Steve"));
    assert_eq!(m.text(1), None);

    let m = PatternMatcher::matches(&pattern, "feed Steve by 2 beefs").unwrap();
    assert_eq!(m.text(1), Some("2"));

    assert!(PatternMatcher::matches(&pattern, "feed").is_none());
    assert!(PatternMatcher::matches(&pattern, "eat the player").is_none());
}

#[test]
fn negation_is_not_a_prefix_match() {
    let positive = compile("%entity% (is|are) on [the] ground");
    let negative = compile("%entity% (isn't|is not|aren't|are not) on [the] ground");

    assert!(PatternMatcher::matches(&positive, "Steve isn't on ground").is_none());
    assert!(PatternMatcher::matches(&negative, "Steve isn't on ground").is_some());

    let m = PatternMatcher::first_match(&[positive, negative], "Steve isn't on ground").unwrap();
    assert_eq!(m.pattern_index, 1);
    assert_eq!(m.text(0), Some("Steve"));
}

#[test]
fn first_listed_form_wins() {
    let patterns = [compile("show %%"), compile("show %text%")];
    let m = PatternMatcher::first_match(&patterns, "show \"x\"").unwrap();
    assert_eq!(m.pattern_index, 0);
}

#[test]
fn placeholders_prefer_shortest_capture() {
    let pattern = compile("set %object% to %object%");
    let m = PatternMatcher::matches(&pattern, "set a to b to c").unwrap();
    assert_eq!(m.text(0), Some("a"));
    assert_eq!(m.text(1), Some("b to c"));
}

#[test]
fn nested_parentheses() {
    let pattern = compile("abs\\(%number%\\)");
    let m = PatternMatcher::matches(&pattern, "abs(abs(-5))").unwrap();
    assert_eq!(m.text(0), Some("abs(-5)"));
}

#[test]
fn regex_capture_is_anchored() {
    let pattern = compile("<\\d+>");
    assert!(PatternMatcher::matches(&pattern, "123").is_some());
    assert!(PatternMatcher::matches(&pattern, "x123").is_none());
    assert!(PatternMatcher::matches(&pattern, "123x").is_none());
}

// =============================================================================
// Normalisation
// =============================================================================

#[test]
fn normalise_keeps_quoted_whitespace() {
    assert_eq!(normalize("  say   \"a   b\"  now "), "say \"a   b\" now");
}
