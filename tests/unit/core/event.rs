use super::*;

#[test]
fn test_key_creation() {
    let key = Key::ctrl(KeyCode::Char('s'));
    assert_eq!(key.code, KeyCode::Char('s'));
    assert_eq!(key.modifiers, KeyModifiers::CONTROL);
}

#[test]
fn test_key_from_event_normalizes_uppercase() {
    let event = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::NONE);
    let key: Key = event.into();
    assert_eq!(key, Key::shift(KeyCode::Char('a')));
}

#[test]
fn test_modifiers_bit_ops() {
    let mut mods = KeyModifiers::CONTROL | KeyModifiers::SHIFT;
    assert!(mods.contains(KeyModifiers::CONTROL));
    assert!(mods.contains(KeyModifiers::SHIFT));
    assert!(!mods.contains(KeyModifiers::ALT));

    mods.remove(KeyModifiers::CONTROL);
    assert_eq!(mods, KeyModifiers::SHIFT);
    assert!(KeyModifiers::NONE.is_empty());
}
