use std::sync::Mutex;

use super::*;

#[test]
fn run_calls_hooks_in_registration_order() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut hooks = ResetHooks::default();
    for name in ["ui", "cart", "filters"] {
        let calls = Arc::clone(&calls);
        hooks.register(name, move || calls.lock().unwrap().push(name));
    }

    hooks.run();

    assert_eq!(*calls.lock().unwrap(), vec!["ui", "cart", "filters"]);
}

#[test]
fn empty_hooks_run_is_noop() {
    let hooks = ResetHooks::default();
    assert!(hooks.is_empty());
    hooks.run();
}

#[test]
fn clone_keeps_registered_hooks() {
    let mut hooks = ResetHooks::default();
    hooks.register("ui", || {});
    let copy = hooks.clone();
    assert_eq!(copy.len(), 1);
    assert_eq!(format!("{copy:?}"), r#"["ui"]"#);
}
