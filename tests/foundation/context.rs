//! Integration tests for the execution context.

use std::collections::HashMap;

use quill_foundation::{Context, EntityRef};

#[test]
fn roles_are_looked_up_case_insensitively() {
    let ctx = Context::new(12)
        .with_role("Player", EntityRef::new("Steve"))
        .with_role("sender", EntityRef::new("console"));
    assert_eq!(ctx.entity("player").map(EntityRef::id), Some("Steve"));
    assert_eq!(ctx.entity("SENDER").map(EntityRef::id), Some("console"));
    assert_eq!(ctx.line(), 12);
}

#[test]
fn unbound_role_is_absent() {
    let ctx = Context::from_roles(HashMap::new(), 1);
    assert!(ctx.entity("player").is_none());
    assert_eq!(ctx.roles().count(), 0);
}

#[test]
fn contexts_can_cross_threads() {
    let ctx = Context::new(1).with_role("player", EntityRef::new("Alex"));
    let handle = std::thread::spawn(move || ctx.entity("player").cloned());
    assert_eq!(handle.join().unwrap(), Some(EntityRef::new("Alex")));
}
