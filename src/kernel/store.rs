use super::{Action, AppState, Effect, NotificationLevel};

mod commands;
mod explorer;
mod fs_events;
mod input_dialog;
mod palette;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        tracing::debug!(action = action_name(&action), "dispatch");
        match action {
            Action::Start => self.start(),
            Action::RunCommand(command) => {
                let target = self.state.explorer.selected_node().cloned();
                self.dispatch_command(command, target)
            }
            Action::RunCommandOn { command, target } => self.dispatch_command(command, target),
            Action::Notify { level, message } => {
                self.state.ui.notify(level, message);
                DispatchResult::changed(true)
            }
            Action::PreviewScroll { delta } => {
                let changed = self
                    .state
                    .ui
                    .preview
                    .as_mut()
                    .is_some_and(|preview| preview.scroll(delta));
                DispatchResult::changed(changed)
            }
            action @ (Action::ExplorerSetViewHeight { .. }
            | Action::ExplorerMoveSelection { .. }
            | Action::ExplorerScroll { .. }
            | Action::ExplorerActivate
            | Action::ExplorerCollapse
            | Action::ExplorerClickRow { .. }) => self.reduce_explorer_action(action),
            action @ (Action::InputDialogAppend(_)
            | Action::InputDialogBackspace
            | Action::InputDialogCursorLeft
            | Action::InputDialogCursorRight
            | Action::InputDialogAccept
            | Action::InputDialogCancel
            | Action::ConfirmDialogAccept
            | Action::ConfirmDialogCancel) => self.reduce_input_dialog_action(action),
            action @ (Action::PaletteAppend(_)
            | Action::PaletteBackspace
            | Action::PaletteMoveSelection(_)
            | Action::PaletteConfirm
            | Action::PaletteClose) => self.reduce_palette_action(action),
            action @ (Action::TreeRefreshed(_)
            | Action::FsOpFinished { .. }
            | Action::HostOpFinished { .. }
            | Action::PreviewLoaded { .. }
            | Action::RootResolved(_)) => self.reduce_fs_event(action),
        }
    }

    fn start(&mut self) -> DispatchResult {
        if self.state.root.is_some() {
            return DispatchResult {
                effects: vec![Effect::RefreshTree],
                state_changed: false,
            };
        }
        if self.state.ui.root_warning_shown {
            return DispatchResult::unchanged();
        }
        self.state.ui.root_warning_shown = true;
        self.state.ui.notify(
            NotificationLevel::Warning,
            super::KernelError::NoRootFolder.to_string(),
        );
        DispatchResult::changed(true)
    }
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::Start => "Start",
        Action::RunCommand(_) => "RunCommand",
        Action::RunCommandOn { .. } => "RunCommandOn",
        Action::Notify { .. } => "Notify",
        Action::ExplorerSetViewHeight { .. } => "ExplorerSetViewHeight",
        Action::ExplorerMoveSelection { .. } => "ExplorerMoveSelection",
        Action::ExplorerScroll { .. } => "ExplorerScroll",
        Action::ExplorerActivate => "ExplorerActivate",
        Action::ExplorerCollapse => "ExplorerCollapse",
        Action::ExplorerClickRow { .. } => "ExplorerClickRow",
        Action::InputDialogAppend(_) => "InputDialogAppend",
        Action::InputDialogBackspace => "InputDialogBackspace",
        Action::InputDialogCursorLeft => "InputDialogCursorLeft",
        Action::InputDialogCursorRight => "InputDialogCursorRight",
        Action::InputDialogAccept => "InputDialogAccept",
        Action::InputDialogCancel => "InputDialogCancel",
        Action::ConfirmDialogAccept => "ConfirmDialogAccept",
        Action::ConfirmDialogCancel => "ConfirmDialogCancel",
        Action::PaletteAppend(_) => "PaletteAppend",
        Action::PaletteBackspace => "PaletteBackspace",
        Action::PaletteMoveSelection(_) => "PaletteMoveSelection",
        Action::PaletteConfirm => "PaletteConfirm",
        Action::PaletteClose => "PaletteClose",
        Action::PreviewScroll { .. } => "PreviewScroll",
        Action::TreeRefreshed(_) => "TreeRefreshed",
        Action::FsOpFinished { .. } => "FsOpFinished",
        Action::HostOpFinished { .. } => "HostOpFinished",
        Action::PreviewLoaded { .. } => "PreviewLoaded",
        Action::RootResolved(_) => "RootResolved",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
