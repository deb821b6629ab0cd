//! Compiled script tests.

use std::sync::{Arc, Mutex};

use quill_foundation::{Context, EntityRef, ErrorKind, Result};
use quill_language::{CompiledScript, ElementRegistry, Host, HostHandle};

#[derive(Default)]
struct Console(Mutex<Vec<String>>);

impl Host for Console {
    fn dispatch_command(&self, sender: Option<&EntityRef>, command: &str) -> Result<()> {
        let sender = sender.map_or("console", EntityRef::id);
        self.0.lock().unwrap().push(format!("{sender}: {command}"));
        Ok(())
    }

    fn set_player_info_visible(&self, visible: bool) -> Result<()> {
        self.0.lock().unwrap().push(format!("info {visible}"));
        Ok(())
    }
}

fn console() -> (Arc<Console>, ElementRegistry) {
    let console = Arc::new(Console::default());
    let registry = ElementRegistry::standard(HostHandle::from_arc(console.clone())).unwrap();
    (console, registry)
}

#[test]
fn command_handler_body() {
    let (console, registry) = console();
    let body = [
        "# greet whoever ran the command",
        "execute command \"say hello\"",
        "execute the player command \"spawn\"",
        "execute command \"op Steve\" by Notch",
        "hide player info",
    ];
    let script = CompiledScript::compile(&registry, "greet.sk", 2, &body).unwrap();
    assert_eq!(script.statements().len(), 4);

    let ctx = Context::new(2)
        .with_role("player", EntityRef::new("Steve"))
        .with_role("sender", EntityRef::new("Alex"));
    script.run(&ctx).unwrap();

    script.run(&Context::new(2).with_role("player", EntityRef::new("Alex"))).unwrap();

    assert_eq!(
        *console.0.lock().unwrap(),
        vec![
            "Alex: say hello",
            "Steve: spawn",
            "Notch: op Steve",
            "info false",
            "console: say hello",
            "Alex: spawn",
            "Notch: op Steve",
            "info false",
        ]
    );
}

#[test]
fn whole_construct_fails_on_one_bad_line() {
    let (_, registry) = console();
    let err = CompiledScript::compile(
        &registry,
        "broken.sk",
        1,
        &["show player info", "show all the things"],
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Parse { line: 2, .. }));
    assert!(format!("{}", err.context.unwrap()).starts_with("at broken.sk:2"));
}

#[test]
fn lenient_compilation_reports_every_error() {
    let (_, registry) = console();
    let (script, errors) = CompiledScript::compile_lenient(
        &registry,
        "lenient.sk",
        1,
        &["dance", "show player info", "reset the player"],
    );
    assert_eq!(script.statements().len(), 1);
    assert_eq!(errors.len(), 2);
    assert!(!script.is_empty());
}

#[test]
fn run_stops_at_the_first_failure() {
    let (console, registry) = console();
    let script = CompiledScript::compile(
        &registry,
        "stop.sk",
        1,
        &["execute the player command \"kit\"", "show player info"],
    )
    .unwrap();

    let err = script.run(&Context::new(1)).unwrap_err();
    assert!(err.is_evaluation());
    assert!(console.0.lock().unwrap().is_empty());
}
