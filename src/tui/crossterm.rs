//! crossterm → crate event conversion.

use crate::core::event::{
    InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crossterm::event as ct;

/// Convert a terminal event. Key releases and focus changes are dropped; the
/// workbench only reacts to presses and repeats.
pub fn translate(event: ct::Event) -> Option<InputEvent> {
    match event {
        ct::Event::Key(key) => {
            let key = KeyEvent::from(key);
            (key.kind != KeyEventKind::Release).then_some(InputEvent::Key(key))
        }
        ct::Event::Mouse(mouse) => Some(InputEvent::Mouse(mouse.into())),
        ct::Event::Resize(w, h) => Some(InputEvent::Resize(w, h)),
        ct::Event::Paste(text) => Some(InputEvent::Paste(text)),
        ct::Event::FocusGained | ct::Event::FocusLost => None,
    }
}

impl From<ct::KeyEvent> for KeyEvent {
    fn from(event: ct::KeyEvent) -> Self {
        let mut modifiers = KeyModifiers::from(event.modifiers);
        let code = match event.code {
            ct::KeyCode::Char(ch) => KeyCode::Char(ch),
            ct::KeyCode::Enter => KeyCode::Enter,
            ct::KeyCode::Tab => KeyCode::Tab,
            ct::KeyCode::BackTab => KeyCode::BackTab,
            ct::KeyCode::Esc => KeyCode::Esc,
            ct::KeyCode::Backspace => KeyCode::Backspace,
            ct::KeyCode::Delete => KeyCode::Delete,
            ct::KeyCode::Up => KeyCode::Up,
            ct::KeyCode::Down => KeyCode::Down,
            ct::KeyCode::Left => KeyCode::Left,
            ct::KeyCode::Right => KeyCode::Right,
            ct::KeyCode::Home => KeyCode::Home,
            ct::KeyCode::End => KeyCode::End,
            ct::KeyCode::PageUp => KeyCode::PageUp,
            ct::KeyCode::PageDown => KeyCode::PageDown,
            ct::KeyCode::F(n) => KeyCode::F(n),
            // Some terminals report Ctrl+Space as NUL.
            ct::KeyCode::Null => {
                modifiers |= KeyModifiers::CONTROL;
                KeyCode::Char(' ')
            }
            _ => KeyCode::Unknown,
        };
        let kind = match event.kind {
            ct::KeyEventKind::Press => KeyEventKind::Press,
            ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
            ct::KeyEventKind::Release => KeyEventKind::Release,
        };
        KeyEvent {
            code,
            modifiers,
            kind,
        }
    }
}

impl From<ct::KeyModifiers> for KeyModifiers {
    fn from(mods: ct::KeyModifiers) -> Self {
        [
            (ct::KeyModifiers::SHIFT, KeyModifiers::SHIFT),
            (ct::KeyModifiers::CONTROL, KeyModifiers::CONTROL),
            (ct::KeyModifiers::ALT, KeyModifiers::ALT),
            (ct::KeyModifiers::SUPER, KeyModifiers::SUPER),
        ]
        .into_iter()
        .filter(|(from, _)| mods.contains(*from))
        .fold(KeyModifiers::NONE, |acc, (_, to)| acc | to)
    }
}

impl From<ct::MouseButton> for MouseButton {
    fn from(button: ct::MouseButton) -> Self {
        match button {
            ct::MouseButton::Left => MouseButton::Left,
            ct::MouseButton::Right => MouseButton::Right,
            ct::MouseButton::Middle => MouseButton::Middle,
        }
    }
}

impl From<ct::MouseEvent> for MouseEvent {
    fn from(event: ct::MouseEvent) -> Self {
        let kind = match event.kind {
            ct::MouseEventKind::Down(button) => MouseEventKind::Down(button.into()),
            ct::MouseEventKind::Up(button) => MouseEventKind::Up(button.into()),
            ct::MouseEventKind::Drag(button) => MouseEventKind::Drag(button.into()),
            ct::MouseEventKind::Moved => MouseEventKind::Moved,
            ct::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
            ct::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
            ct::MouseEventKind::ScrollLeft => MouseEventKind::ScrollLeft,
            ct::MouseEventKind::ScrollRight => MouseEventKind::ScrollRight,
        };
        MouseEvent {
            kind,
            column: event.column,
            row: event.row,
            modifiers: event.modifiers.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
