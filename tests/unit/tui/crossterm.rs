use super::*;

#[test]
fn ctrl_space_normalizes_from_null() {
    let event = ct::KeyEvent::new(ct::KeyCode::Null, ct::KeyModifiers::NONE);
    let converted = KeyEvent::from(event);
    assert_eq!(converted.code, KeyCode::Char(' '));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn modifiers_are_carried_over() {
    let event = ct::KeyEvent::new(
        ct::KeyCode::Char('p'),
        ct::KeyModifiers::CONTROL | ct::KeyModifiers::SHIFT,
    );
    let converted = KeyEvent::from(event);
    assert_eq!(converted.code, KeyCode::Char('p'));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
    assert!(converted.modifiers.contains(KeyModifiers::SHIFT));
    assert!(!converted.modifiers.contains(KeyModifiers::ALT));
    assert_eq!(converted.kind, KeyEventKind::Press);
}

#[test]
fn unsupported_keys_become_unknown() {
    let event = ct::KeyEvent::new(ct::KeyCode::CapsLock, ct::KeyModifiers::NONE);
    assert_eq!(KeyEvent::from(event).code, KeyCode::Unknown);
}

#[test]
fn key_releases_are_dropped() {
    let event = ct::KeyEvent::new_with_kind(
        ct::KeyCode::Char('a'),
        ct::KeyModifiers::NONE,
        ct::KeyEventKind::Release,
    );
    assert_eq!(translate(ct::Event::Key(event)), None);
}

#[test]
fn focus_changes_are_dropped() {
    assert_eq!(translate(ct::Event::FocusGained), None);
    assert_eq!(translate(ct::Event::FocusLost), None);
}

#[test]
fn paste_keeps_text() {
    assert_eq!(
        translate(ct::Event::Paste("notes".to_string())),
        Some(InputEvent::Paste("notes".to_string()))
    );
}

#[test]
fn scroll_events_keep_position() {
    let event = ct::Event::Mouse(ct::MouseEvent {
        kind: ct::MouseEventKind::ScrollDown,
        column: 3,
        row: 7,
        modifiers: ct::KeyModifiers::NONE,
    });
    match translate(event) {
        Some(InputEvent::Mouse(mouse)) => {
            assert_eq!(mouse.kind, MouseEventKind::ScrollDown);
            assert_eq!((mouse.column, mouse.row), (3, 7));
        }
        other => panic!("unexpected event: {other:?}"),
    }
}
