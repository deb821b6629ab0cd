//! Integration tests for Error types
//!
//! Tests error construction, display, and context.

use quill_foundation::{Category, Error, ErrorContext, ErrorKind, EvaluationError, ValueType};

#[test]
fn parse_error_names_line_and_category() {
    let err = Error::parse(7, Category::Effect, "fly away");
    assert!(matches!(err.kind, ErrorKind::Parse { line: 7, .. }));
    assert_eq!(format!("{err}"), "line 7: cannot understand `fly away` as effect");
}

#[test]
fn unimplemented_operation() {
    let err = Error::unimplemented("feed effect");
    assert_eq!(
        format!("{err}"),
        "cannot execute feed effect without a host implementation"
    );
}

#[test]
fn evaluation_errors() {
    let err = Error::missing_role("player");
    assert!(err.is_evaluation());
    assert!(matches!(
        err.kind,
        ErrorKind::Evaluation(EvaluationError::MissingRole(ref role)) if role == "player"
    ));

    let err = Error::type_mismatch(ValueType::Number, ValueType::Text);
    assert!(format!("{err}").contains("expected number"));

    assert!(!Error::nesting_too_deep(3).is_evaluation());
}

#[test]
fn context_accumulates_frames() {
    let err = Error::invalid_argument("bad")
        .with_frame("abs function (line 1)")
        .with_frame("feed effect (line 1)");
    let context = err.context.unwrap();
    assert_eq!(context.stack.len(), 2);

    let rendered = ErrorContext::new()
        .with_source("food.sk")
        .with_line(4)
        .to_string();
    assert!(rendered.starts_with("at food.sk:4"));
}
