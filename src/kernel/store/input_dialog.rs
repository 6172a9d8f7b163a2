use crate::kernel::effect::FsOp;
use crate::kernel::naming::{renamed_name, validate_name, with_default_extension};
use crate::kernel::state::{InputDialogKind, PendingAction};
use crate::kernel::{Action, Effect};

impl super::Store {
    pub(super) fn reduce_input_dialog_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::InputDialogAppend(ch) => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible {
                    return super::DispatchResult::unchanged();
                }

                dialog.error = None;
                if dialog.cursor > dialog.value.len() {
                    dialog.cursor = dialog.value.len();
                }
                dialog.value.insert(dialog.cursor, ch);
                dialog.cursor += ch.len_utf8();
                super::DispatchResult::changed(true)
            }
            Action::InputDialogBackspace => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor == 0 {
                    return super::DispatchResult::unchanged();
                }

                dialog.error = None;
                let prev = dialog.value[..dialog.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                dialog.value.drain(prev..dialog.cursor);
                dialog.cursor = prev;
                super::DispatchResult::changed(true)
            }
            Action::InputDialogCursorLeft => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor == 0 {
                    return super::DispatchResult::unchanged();
                }

                let prev = dialog.value[..dialog.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                let changed = prev != dialog.cursor;
                dialog.cursor = prev;
                super::DispatchResult::changed(changed)
            }
            Action::InputDialogCursorRight => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor >= dialog.value.len() {
                    return super::DispatchResult::unchanged();
                }

                let next = dialog.value[dialog.cursor..]
                    .chars()
                    .next()
                    .map(|ch| dialog.cursor + ch.len_utf8())
                    .unwrap_or(dialog.value.len());
                let changed = next != dialog.cursor;
                dialog.cursor = next;
                super::DispatchResult::changed(changed)
            }
            Action::InputDialogAccept => self.accept_input_dialog(),
            Action::InputDialogCancel => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible {
                    return super::DispatchResult::unchanged();
                }
                dialog.reset();
                super::DispatchResult::changed(true)
            }
            Action::ConfirmDialogAccept => {
                let dialog = &mut self.state.ui.confirm_dialog;
                if !dialog.visible {
                    return super::DispatchResult::unchanged();
                }
                let pending = dialog.on_confirm.take();
                dialog.reset();

                let effects = match pending {
                    Some(PendingAction::DeletePath { path, is_dir }) => {
                        vec![Effect::Fs(FsOp::Delete { path, is_dir })]
                    }
                    None => Vec::new(),
                };
                super::DispatchResult {
                    effects,
                    state_changed: true,
                }
            }
            Action::ConfirmDialogCancel => {
                let dialog = &mut self.state.ui.confirm_dialog;
                if !dialog.visible {
                    return super::DispatchResult::unchanged();
                }
                dialog.reset();
                super::DispatchResult::changed(true)
            }
            _ => unreachable!("non-dialog action passed to reduce_input_dialog_action"),
        }
    }

    fn accept_input_dialog(&mut self) -> super::DispatchResult {
        let dialog = &mut self.state.ui.input_dialog;
        if !dialog.visible {
            return super::DispatchResult::unchanged();
        }

        let Some(kind) = dialog.kind.as_ref() else {
            dialog.reset();
            return super::DispatchResult::changed(true);
        };

        let value = dialog.value.trim();
        let effect = match kind {
            InputDialogKind::SelectRoot => {
                if value.is_empty() {
                    let prev = dialog.error.replace("Path required".to_string());
                    return super::DispatchResult::changed(
                        prev.as_deref() != dialog.error.as_deref(),
                    );
                }
                Effect::ResolveRoot(value.to_string())
            }
            InputDialogKind::NewFile { parent_dir } => match validate_name(value) {
                Ok(name) => {
                    let name = with_default_extension(&name, &self.state.default_extension);
                    Effect::Fs(FsOp::CreateFile(parent_dir.join(name)))
                }
                Err(err) => {
                    let prev = dialog.error.replace(err.to_string());
                    return super::DispatchResult::changed(
                        prev.as_deref() != dialog.error.as_deref(),
                    );
                }
            },
            InputDialogKind::NewFolder { parent_dir } => match validate_name(value) {
                Ok(name) => Effect::Fs(FsOp::CreateDir(parent_dir.join(name))),
                Err(err) => {
                    let prev = dialog.error.replace(err.to_string());
                    return super::DispatchResult::changed(
                        prev.as_deref() != dialog.error.as_deref(),
                    );
                }
            },
            InputDialogKind::Rename { from, extension } => {
                // Blank input aborts the rename.
                if value.is_empty() {
                    dialog.reset();
                    return super::DispatchResult::changed(true);
                }
                let name = match renamed_name(value, extension.as_deref()) {
                    Ok(name) => name,
                    Err(err) => {
                        let prev = dialog.error.replace(err.to_string());
                        return super::DispatchResult::changed(
                            prev.as_deref() != dialog.error.as_deref(),
                        );
                    }
                };
                let Some(parent) = from.parent() else {
                    dialog.reset();
                    return super::DispatchResult::changed(true);
                };
                let to = parent.join(name);
                if &to == from {
                    dialog.reset();
                    return super::DispatchResult::changed(true);
                }
                Effect::Fs(FsOp::Rename {
                    from: from.clone(),
                    to,
                })
            }
        };

        dialog.reset();
        super::DispatchResult {
            effects: vec![effect],
            state_changed: true,
        }
    }
}
