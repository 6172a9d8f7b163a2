use super::util;
use super::{EventResult, Workbench, SCROLL_STEP};
use crate::core::event::{
    InputEvent, Key, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::services::ports::Host;
use crate::kernel::Action as KernelAction;
use std::time::Instant;

pub(super) fn handle_input<H: Host>(workbench: &mut Workbench<H>, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(key_event) => workbench.handle_key_event(key_event),
        InputEvent::Mouse(mouse_event) => workbench.handle_mouse_event(mouse_event),
        InputEvent::Paste(text) => workbench.handle_paste(text),
        InputEvent::Resize(_, _) => EventResult::Consumed,
    }
}

/// Terminals disagree on whether `:` or `?` carry SHIFT; bindings never do.
fn normalize_key(event: &KeyEvent) -> Key {
    let mut key: Key = (*event).into();
    if let KeyCode::Char(ch) = key.code {
        if !ch.is_ascii_alphabetic() && key.modifiers.contains(KeyModifiers::SHIFT) {
            key.modifiers.remove(KeyModifiers::SHIFT);
        }
    }
    key
}

fn is_text_input(modifiers: KeyModifiers) -> bool {
    modifiers.is_empty() || modifiers == KeyModifiers::SHIFT
}

impl<H: Host> Workbench<H> {
    fn handle_key_event(&mut self, key_event: &KeyEvent) -> EventResult {
        if self.state().ui.input_dialog.visible {
            return self.handle_input_dialog_key(key_event);
        }

        if self.state().ui.confirm_dialog.visible {
            let action = match key_event.code {
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                    KernelAction::ConfirmDialogAccept
                }
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                    KernelAction::ConfirmDialogCancel
                }
                _ => return EventResult::Consumed,
            };
            return self.consume(action);
        }

        let key = normalize_key(key_event);

        if self.state().ui.command_palette.visible {
            if let Some(command) = self
                .keybindings
                .resolve(KeybindingContext::CommandPalette, &key)
                .cloned()
            {
                return self.consume(KernelAction::RunCommand(command));
            }
            return match key_event.code {
                KeyCode::Backspace => self.consume(KernelAction::PaletteBackspace),
                KeyCode::Char(ch) if is_text_input(key_event.modifiers) => {
                    self.consume(KernelAction::PaletteAppend(ch))
                }
                _ => EventResult::Consumed,
            };
        }

        match self
            .keybindings
            .resolve(KeybindingContext::Explorer, &key)
            .cloned()
        {
            Some(command) => self.consume(KernelAction::RunCommand(command)),
            None => EventResult::Ignored,
        }
    }

    /// The frame is redrawn after every routed event, so the change flag is unused.
    fn consume(&mut self, action: KernelAction) -> EventResult {
        self.dispatch_kernel(action);
        EventResult::Consumed
    }

    fn handle_input_dialog_key(&mut self, key_event: &KeyEvent) -> EventResult {
        let action = match (key_event.code, key_event.modifiers) {
            (KeyCode::Enter, _) => KernelAction::InputDialogAccept,
            (KeyCode::Esc, _) => KernelAction::InputDialogCancel,
            (KeyCode::Backspace, _) => KernelAction::InputDialogBackspace,
            (KeyCode::Left, _) => KernelAction::InputDialogCursorLeft,
            (KeyCode::Right, _) => KernelAction::InputDialogCursorRight,
            (KeyCode::Char(ch), mods) if is_text_input(mods) => KernelAction::InputDialogAppend(ch),
            // The dialog is modal: everything else is swallowed.
            _ => return EventResult::Consumed,
        };
        self.consume(action)
    }

    fn handle_paste(&mut self, text: &str) -> EventResult {
        let ui = &self.state().ui;
        let to_dialog = ui.input_dialog.visible;
        if !to_dialog && !ui.command_palette.visible {
            return EventResult::Ignored;
        }

        for ch in text.chars().filter(|ch| !ch.is_control()) {
            let action = if to_dialog {
                KernelAction::InputDialogAppend(ch)
            } else {
                KernelAction::PaletteAppend(ch)
            };
            let _ = self.dispatch_kernel(action);
        }
        EventResult::Consumed
    }

    fn handle_mouse_event(&mut self, event: &MouseEvent) -> EventResult {
        let ui = &self.state().ui;
        if ui.has_modal() || ui.command_palette.visible {
            return EventResult::Ignored;
        }

        let in_tree = self
            .layout
            .tree_area
            .is_some_and(|area| util::rect_contains(area, event.column, event.row));
        let in_preview = self
            .layout
            .preview_area
            .is_some_and(|area| util::rect_contains(area, event.column, event.row));

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) if in_tree => {
                let Some(row) = self.tree_row_at(event.row) else {
                    return EventResult::Consumed;
                };
                self.consume(KernelAction::ExplorerClickRow {
                    row,
                    now: Instant::now(),
                })
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown if in_tree || in_preview => {
                let delta = if event.kind == MouseEventKind::ScrollUp {
                    -SCROLL_STEP
                } else {
                    SCROLL_STEP
                };
                let action = if in_tree {
                    KernelAction::ExplorerScroll { delta }
                } else {
                    KernelAction::PreviewScroll { delta }
                };
                self.consume(action)
            }
            _ => EventResult::Ignored,
        }
    }

    /// Tree row under terminal row `y`, if there is one.
    fn tree_row_at(&self, y: u16) -> Option<usize> {
        let area = self.layout.tree_area?;
        let explorer = &self.state().explorer;
        let row = explorer.scroll_offset + y.checked_sub(area.y)? as usize;
        (row < explorer.rows.len()).then_some(row)
    }
}
