use crate::core::Command;
use crate::kernel::clipboard::{ClipboardAction, ClipboardSlot};
use crate::kernel::effect::{FsOp, HostOp};
use crate::kernel::naming::split_stem;
use crate::kernel::preview::PreviewKind;
use crate::kernel::state::{InputDialogKind, PendingAction};
use crate::kernel::{Action, Effect, KernelError, NotificationLevel};
use crate::models::TreeNode;

impl super::Store {
    pub(super) fn dispatch_command(
        &mut self,
        command: Command,
        target: Option<TreeNode>,
    ) -> super::DispatchResult {
        match command {
            Command::SelectRootFolder => {
                let current = self
                    .state
                    .root
                    .as_ref()
                    .map(|root| root.to_string_lossy().to_string())
                    .unwrap_or_default();
                self.state.ui.command_palette.reset();
                self.state.ui.input_dialog.open(
                    "Select root folder",
                    current,
                    InputDialogKind::SelectRoot,
                );
                super::DispatchResult::changed(true)
            }
            Command::NewFile | Command::NewFolder => {
                let Some(parent_dir) = self.state.target_dir(target.as_ref()) else {
                    return self.fail(KernelError::NoRootFolder);
                };
                self.open_create_dialog(command == Command::NewFolder, parent_dir)
            }
            Command::NewFileInRoot | Command::NewFolderInRoot => {
                let Some(root) = self.state.root.clone() else {
                    return self.fail(KernelError::NoRootFolder);
                };
                self.open_create_dialog(command == Command::NewFolderInRoot, root)
            }
            Command::OpenMarkdownPreview => {
                let Some(node) = target else {
                    return self.fail(KernelError::NoSelection);
                };
                if !node.is_markdown() {
                    self.state.ui.notify(
                        NotificationLevel::Warning,
                        "Preview is only available for Markdown files",
                    );
                    return super::DispatchResult::changed(true);
                }
                super::DispatchResult {
                    effects: vec![Effect::LoadPreview {
                        path: node.path,
                        kind: PreviewKind::Markdown,
                    }],
                    state_changed: false,
                }
            }
            Command::ShowInOsExplorer => match target {
                Some(node) => host_effect(HostOp::Reveal(node.path)),
                None => self.fail(KernelError::NoSelection),
            },
            Command::CopyPath => match target {
                Some(node) => host_effect(HostOp::CopyPath(node.path)),
                None => self.fail(KernelError::NoSelection),
            },
            Command::Copy | Command::Cut => {
                let Some(node) = target else {
                    return self.fail(KernelError::NoSelection);
                };
                let action = if command == Command::Cut {
                    ClipboardAction::Cut
                } else {
                    ClipboardAction::Copy
                };
                self.state.clipboard = ClipboardSlot::stage(node.path, action);
                self.state.ui.notify(
                    NotificationLevel::Info,
                    format!("{}: {}", action.verb(), node.name),
                );
                super::DispatchResult::changed(true)
            }
            Command::Paste => {
                let Some(target_dir) = self.state.target_dir(target.as_ref()) else {
                    return self.fail(KernelError::NoRootFolder);
                };
                match self.state.clipboard.plan_paste(&target_dir) {
                    Ok(plan) => super::DispatchResult {
                        effects: vec![Effect::Fs(FsOp::Paste(plan))],
                        state_changed: false,
                    },
                    Err(err) => self.fail(err),
                }
            }
            Command::Rename => {
                let Some(node) = target else {
                    return self.fail(KernelError::NoSelection);
                };
                let (value, extension) = if node.is_folder() {
                    (node.name.clone(), None)
                } else {
                    split_stem(&node.name)
                };
                self.state.ui.command_palette.reset();
                self.state.ui.input_dialog.open(
                    format!("Rename {}", node.name),
                    value,
                    InputDialogKind::Rename {
                        from: node.path,
                        extension,
                    },
                );
                super::DispatchResult::changed(true)
            }
            Command::Delete => {
                let Some(node) = target else {
                    return self.fail(KernelError::NoSelection);
                };
                let is_dir = node.is_folder();
                let message = if is_dir {
                    format!(
                        "Are you sure you want to delete '{}' and its contents?",
                        node.name
                    )
                } else {
                    format!("Are you sure you want to delete '{}'?", node.name)
                };
                self.state.ui.command_palette.reset();
                let dialog = &mut self.state.ui.confirm_dialog;
                dialog.visible = true;
                dialog.message = message;
                dialog.on_confirm = Some(PendingAction::DeletePath {
                    path: node.path,
                    is_dir,
                });
                super::DispatchResult::changed(true)
            }
            Command::Refresh => super::DispatchResult {
                effects: vec![Effect::RefreshTree],
                state_changed: false,
            },
            Command::ExplorerUp => {
                self.reduce_explorer_action(Action::ExplorerMoveSelection { delta: -1 })
            }
            Command::ExplorerDown => {
                self.reduce_explorer_action(Action::ExplorerMoveSelection { delta: 1 })
            }
            Command::ExplorerPageUp => {
                let delta = self.state.explorer.view_height.max(1) as isize;
                self.reduce_explorer_action(Action::ExplorerMoveSelection { delta: -delta })
            }
            Command::ExplorerPageDown => {
                let delta = self.state.explorer.view_height.max(1) as isize;
                self.reduce_explorer_action(Action::ExplorerMoveSelection { delta })
            }
            Command::ExplorerActivate => self.reduce_explorer_action(Action::ExplorerActivate),
            Command::ExplorerCollapse => self.reduce_explorer_action(Action::ExplorerCollapse),
            Command::PreviewScrollUp => self.dispatch(Action::PreviewScroll { delta: -1 }),
            Command::PreviewScrollDown => self.dispatch(Action::PreviewScroll { delta: 1 }),
            Command::ClosePreview => {
                super::DispatchResult::changed(self.state.ui.preview.take().is_some())
            }
            Command::CommandPalette => {
                if self.state.ui.has_modal() {
                    return super::DispatchResult::unchanged();
                }
                let palette = &mut self.state.ui.command_palette;
                let was_visible = palette.visible;
                palette.reset();
                palette.visible = !was_visible;
                super::DispatchResult::changed(true)
            }
            Command::PaletteUp => self.reduce_palette_action(Action::PaletteMoveSelection(-1)),
            Command::PaletteDown => self.reduce_palette_action(Action::PaletteMoveSelection(1)),
            Command::PaletteConfirm => self.reduce_palette_action(Action::PaletteConfirm),
            Command::PaletteClose => self.reduce_palette_action(Action::PaletteClose),
            Command::Escape => self.escape(),
            Command::Quit => {
                self.state.ui.should_quit = true;
                super::DispatchResult::changed(true)
            }
            Command::Custom(name) => {
                self.state
                    .ui
                    .notify(NotificationLevel::Warning, format!("Unknown command: {name}"));
                super::DispatchResult::changed(true)
            }
        }
    }

    /// Report a command failure without touching anything else.
    pub(super) fn fail(&mut self, err: KernelError) -> super::DispatchResult {
        let level = match err {
            KernelError::NoRootFolder | KernelError::NoSelection | KernelError::EmptyClipboard => {
                NotificationLevel::Warning
            }
            _ => NotificationLevel::Error,
        };
        self.state.ui.notify(level, err.to_string());
        super::DispatchResult::changed(true)
    }

    fn open_create_dialog(
        &mut self,
        folder: bool,
        parent_dir: std::path::PathBuf,
    ) -> super::DispatchResult {
        let (title, kind) = if folder {
            ("New folder", InputDialogKind::NewFolder { parent_dir })
        } else {
            ("New file", InputDialogKind::NewFile { parent_dir })
        };
        self.state.ui.command_palette.reset();
        self.state.ui.input_dialog.open(title, String::new(), kind);
        super::DispatchResult::changed(true)
    }

    /// Close the top-most overlay.
    fn escape(&mut self) -> super::DispatchResult {
        let ui = &mut self.state.ui;
        if ui.confirm_dialog.visible {
            ui.confirm_dialog.reset();
        } else if ui.input_dialog.visible {
            ui.input_dialog.reset();
        } else if ui.command_palette.visible {
            ui.command_palette.reset();
        } else if ui.preview.take().is_none() {
            return super::DispatchResult::unchanged();
        }
        super::DispatchResult::changed(true)
    }
}

fn host_effect(op: HostOp) -> super::DispatchResult {
    super::DispatchResult {
        effects: vec![Effect::Host(op)],
        state_changed: false,
    }
}
