use super::*;
use crate::core::event::KeyModifiers;

#[test]
fn explorer_has_navigation_bindings() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Explorer, &Key::simple(KeyCode::Down)),
        Some(&Command::ExplorerDown)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Explorer, &Key::simple(KeyCode::F(2))),
        Some(&Command::Rename)
    );
}

#[test]
fn global_commands_fall_through_in_explorer() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(
            KeybindingContext::Explorer,
            &Key::ctrl_shift(KeyCode::Char('p'))
        ),
        Some(&Command::CommandPalette)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Explorer, &Key::ctrl(KeyCode::Char('q'))),
        Some(&Command::Quit)
    );
}

#[test]
fn palette_esc_closes_palette_before_global_escape() {
    let service = KeybindingService::new();
    let esc = Key::simple(KeyCode::Esc);
    assert_eq!(
        service.resolve(KeybindingContext::CommandPalette, &esc),
        Some(&Command::PaletteClose)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Explorer, &esc),
        Some(&Command::Escape)
    );
}

#[test]
fn palette_does_not_see_explorer_bindings() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::CommandPalette, &Key::simple(KeyCode::Char('d'))),
        None
    );
}

#[test]
fn context_parse_accepts_aliases() {
    assert_eq!(KeybindingContext::parse(" Explorer "), Some(KeybindingContext::Explorer));
    assert_eq!(KeybindingContext::parse("palette"), Some(KeybindingContext::CommandPalette));
    assert_eq!(KeybindingContext::parse("global"), Some(KeybindingContext::Global));
    assert_eq!(KeybindingContext::parse("editor"), None);
}

#[test]
fn apply_rules_binds_and_unbinds() {
    let mut service = KeybindingService::new();
    service.apply_rules(&[
        KeybindingRule {
            key: "ctrl+alt+n".to_string(),
            command: "urnote.newFolderInRoot".to_string(),
            context: Some("explorer".to_string()),
        },
        KeybindingRule {
            key: "d".to_string(),
            command: String::new(),
            context: Some("explorer".to_string()),
        },
        KeybindingRule {
            key: "f6".to_string(),
            command: "urnote.refresh".to_string(),
            context: None,
        },
    ]);

    let ctrl_alt_n = Key::new(
        KeyCode::Char('n'),
        KeyModifiers::CONTROL | KeyModifiers::ALT,
    );
    assert_eq!(
        service.resolve(KeybindingContext::Explorer, &ctrl_alt_n),
        Some(&Command::NewFolderInRoot)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Explorer, &Key::simple(KeyCode::Char('d'))),
        None
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::simple(KeyCode::F(6))),
        Some(&Command::Refresh)
    );
}

#[test]
fn apply_rules_skips_unknown_context_and_bad_keys() {
    let mut service = KeybindingService::new();
    service.apply_rules(&[
        KeybindingRule {
            key: "ctrl+".to_string(),
            command: "urnote.refresh".to_string(),
            context: None,
        },
        KeybindingRule {
            key: "d".to_string(),
            command: String::new(),
            context: Some("editor".to_string()),
        },
    ]);

    assert_eq!(
        service.resolve(KeybindingContext::Explorer, &Key::simple(KeyCode::Char('d'))),
        Some(&Command::Delete)
    );
}

#[test]
fn key_for_finds_a_binding() {
    let service = KeybindingService::new();
    assert_eq!(
        service.key_for(KeybindingContext::Global, &Command::SelectRootFolder),
        Some(Key::ctrl(KeyCode::Char('o')))
    );
    assert!(service
        .key_for(KeybindingContext::Explorer, &Command::SelectRootFolder)
        .is_none());
}

#[test]
fn key_for_prefers_the_plainest_key() {
    let mut service = KeybindingService::new();
    assert_eq!(
        service.key_for(KeybindingContext::Global, &Command::CommandPalette),
        Some(Key::simple(KeyCode::F(1)))
    );

    service.unbind(KeybindingContext::Global, &Key::simple(KeyCode::F(1)));
    assert_eq!(
        service.key_for(KeybindingContext::Global, &Command::CommandPalette),
        Some(Key::ctrl_shift(KeyCode::Char('p')))
    );
}
