//! Integration tests for values and type hints.

use chrono::NaiveDate;
use quill_foundation::{EntityRef, Value, ValueType};

// =============================================================================
// Display
// =============================================================================

#[test]
fn whole_numbers_render_as_integers() {
    assert_eq!(Value::Number(3.0).to_text(), "3");
    assert_eq!(Value::Number(-2.5).to_text(), "-2.5");
}

#[test]
fn entity_renders_its_id() {
    assert_eq!(Value::Entity(EntityRef::new("Steve")).to_text(), "Steve");
}

#[test]
fn date_value_type() {
    let date = NaiveDate::from_ymd_opt(2019, 3, 14)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap();
    assert_eq!(Value::Date(date).value_type(), ValueType::Date);
}

// =============================================================================
// Accessors
// =============================================================================

#[test]
fn expect_accessors_report_mismatch() {
    let value = Value::text("hello");
    assert_eq!(value.as_text(), Some("hello"));
    assert!(value.expect_number().is_err());
    assert!(value.expect_bool().is_err());
    assert!(value.expect_entity().is_err());
}

#[test]
fn conversions() {
    assert_eq!(Value::from(true), Value::Boolean(true));
    assert_eq!(Value::from(1.5), Value::Number(1.5));
    assert_eq!(Value::from("x"), Value::text("x"));
}

// =============================================================================
// Hints
// =============================================================================

#[test]
fn hints_accept_their_own_type() {
    for hint in ["number", "text", "boolean", "entity", "date"] {
        let ty = ValueType::from_hint(hint).unwrap();
        assert!(ty.accepts(ty), "{hint}");
    }
}

#[test]
fn nothing_accepts_void() {
    for ty in [ValueType::Any, ValueType::Number, ValueType::Entity] {
        assert!(!ty.accepts(ValueType::Void));
    }
}
