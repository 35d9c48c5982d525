//! Tests for key combination mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use purlin::events::Modifiers;
use purlin::keybinds::{Key, KeyCombo};

#[test]
fn test_from_crossterm_basic_keys() {
    let cases = [
        (KeyCode::Enter, Key::Enter),
        (KeyCode::Esc, Key::Escape),
        (KeyCode::Up, Key::Up),
        (KeyCode::Down, Key::Down),
        (KeyCode::Char(' '), Key::Char(' ')),
        (KeyCode::Char('a'), Key::Char('a')),
        (KeyCode::F(5), Key::F(5)),
    ];
    for (code, expected) in cases {
        let combo = KeyCombo::from_crossterm(&KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap_or_else(|| panic!("no mapping for {code:?}"));
        assert_eq!(combo.key, expected);
        assert_eq!(combo.modifiers, Modifiers::NONE);
    }
}

#[test]
fn test_from_crossterm_modifiers() {
    let event = KeyEvent::new(
        KeyCode::Char('k'),
        KeyModifiers::CONTROL | KeyModifiers::SHIFT,
    );
    let combo = KeyCombo::from_crossterm(&event).expect("mapped key");
    assert!(combo.modifiers.ctrl);
    assert!(combo.modifiers.shift);
    assert!(!combo.modifiers.alt);
}

#[test]
fn test_from_crossterm_unmapped_key() {
    let event = KeyEvent::new(KeyCode::CapsLock, KeyModifiers::NONE);
    assert!(KeyCombo::from_crossterm(&event).is_none());
}

#[test]
fn test_combo_builders() {
    let combo = KeyCombo::key(Key::Enter).ctrl().alt();
    assert_eq!(combo.key, Key::Enter);
    assert!(combo.modifiers.ctrl);
    assert!(combo.modifiers.alt);
    assert!(!combo.modifiers.shift);
    assert!(combo.modifiers.any());
}
