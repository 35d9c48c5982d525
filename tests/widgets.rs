//! Tests for the Input and Toggle value mirrors.

use std::cell::RefCell;
use std::rc::Rc;

use purlin::input::Input;
use purlin::toggle::Toggle;

#[test]
fn test_input_uncontrolled_change() {
    let input = Input::with_default_value("start");
    assert_eq!(input.value(), "start");
    input.change_value("typed");
    assert_eq!(input.value(), "typed");
    input.clear();
    assert_eq!(input.value(), "");
}

#[test]
fn test_input_controlled_suppresses_mutation() {
    let input = Input::new();
    input.set_external_value(Some("fixed".to_string()));
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    input.on_change(move |value| sink.borrow_mut().push(value.to_string()));

    input.change_value("typed");
    // The override stays authoritative; the host still hears the change.
    assert_eq!(input.value(), "fixed");
    assert_eq!(*changes.borrow(), vec!["typed".to_string()]);

    // Releasing the override reveals untouched internal state.
    input.set_external_value(None);
    assert_eq!(input.value(), "");
}

#[test]
fn test_input_focus_tracking() {
    let input = Input::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let focus_log = Rc::clone(&log);
    input.on_focus(move || focus_log.borrow_mut().push("focus"));
    let blur_log = Rc::clone(&log);
    input.on_blur(move || blur_log.borrow_mut().push("blur"));

    input.handle_focus();
    assert!(input.focused());
    input.handle_blur();
    assert!(!input.focused());
    assert_eq!(*log.borrow(), vec!["focus", "blur"]);
}

#[test]
fn test_input_dirty_flag() {
    let input = Input::new();
    input.clear_dirty();
    input.change_value("x");
    assert!(input.is_dirty());
    input.clear_dirty();
    assert!(!input.is_dirty());
}

#[test]
fn test_toggle_uncontrolled_flip() {
    let toggle = Toggle::new("newsletter");
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    toggle.on_change(move |checked, value| sink.borrow_mut().push((checked, value.to_string())));

    assert!(!toggle.checked());
    toggle.handle_change();
    assert!(toggle.checked());
    toggle.handle_change();
    assert!(!toggle.checked());
    assert_eq!(
        *changes.borrow(),
        vec![
            (true, "newsletter".to_string()),
            (false, "newsletter".to_string())
        ]
    );
}

#[test]
fn test_toggle_controlled_suppresses_mutation() {
    let toggle = Toggle::new("v");
    toggle.set_external_checked(Some(false));
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    toggle.on_change(move |checked, _| *sink.borrow_mut() = Some(checked));

    toggle.handle_change();
    assert!(!toggle.checked());
    // The handler still hears the flag the interaction asked for.
    assert_eq!(*seen.borrow(), Some(true));
}

#[test]
fn test_disabled_toggle_is_inert() {
    let toggle = Toggle::new("v");
    toggle.set_disabled(true);
    let fired = Rc::new(RefCell::new(false));
    let sink = Rc::clone(&fired);
    toggle.on_change(move |_, _| *sink.borrow_mut() = true);

    toggle.handle_change();
    assert!(!toggle.checked());
    assert!(!*fired.borrow());
}

#[test]
fn test_toggle_focus_tracking() {
    let toggle = Toggle::new("v");
    toggle.handle_focus();
    assert!(toggle.focused());
    toggle.handle_blur();
    assert!(!toggle.focused());
}
