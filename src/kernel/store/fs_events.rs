use std::path::Path;

use crate::kernel::clipboard::ClipboardAction;
use crate::kernel::effect::{FsOp, HostOp};
use crate::kernel::preview::render;
use crate::kernel::state::PreviewState;
use crate::kernel::{Action, Effect, NotificationLevel};

impl super::Store {
    pub(super) fn reduce_fs_event(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::TreeRefreshed(snapshot) => {
                if snapshot.root != self.state.root {
                    // Listed before the root changed.
                    return super::DispatchResult::unchanged();
                }
                for failure in &snapshot.failures {
                    self.state.ui.notify(
                        NotificationLevel::Error,
                        format!("Failed to list {}: {}", failure.path.display(), failure.error),
                    );
                }
                super::DispatchResult::changed(self.state.explorer.apply_snapshot(snapshot))
            }
            Action::FsOpFinished { op, result } => {
                match result {
                    Ok(()) => self.apply_fs_success(&op),
                    Err(err) => {
                        tracing::warn!(op = ?op, error = %err, "filesystem operation failed");
                        let message = format!("{}: {err}", failure_prefix(&op));
                        self.state.ui.notify(NotificationLevel::Error, message);
                        if let FsOp::Paste(plan) = &op {
                            let slot = std::mem::take(&mut self.state.clipboard);
                            self.state.clipboard = slot.after_paste(plan, false);
                        }
                    }
                }
                super::DispatchResult {
                    effects: vec![Effect::RefreshTree],
                    state_changed: true,
                }
            }
            Action::HostOpFinished { op, result } => match (op, result) {
                (HostOp::CopyPath(path), Ok(())) => {
                    self.state.ui.notify(
                        NotificationLevel::Info,
                        format!("Copied path: {}", path.display()),
                    );
                    super::DispatchResult::changed(true)
                }
                (HostOp::Reveal(_) | HostOp::PersistRoot(_), Ok(())) => {
                    super::DispatchResult::unchanged()
                }
                (HostOp::PersistRoot(_), Err(err)) => {
                    self.state.ui.notify(
                        NotificationLevel::Warning,
                        format!("Root folder was not saved: {err}"),
                    );
                    super::DispatchResult::changed(true)
                }
                (_, Err(err)) => self.fail(err),
            },
            Action::PreviewLoaded { path, kind, result } => match result {
                Ok(content) => {
                    let lines = render(&content, kind);
                    self.state.ui.preview = Some(PreviewState {
                        path,
                        kind,
                        lines,
                        scroll: 0,
                    });
                    super::DispatchResult::changed(true)
                }
                Err(err) => self.fail(err),
            },
            Action::RootResolved(result) => match result {
                Ok(root) => {
                    self.state.ui.notify(
                        NotificationLevel::Info,
                        format!("Root folder set to: {}", root.display()),
                    );
                    self.state.root = Some(root.clone());
                    self.state.explorer.reset();
                    self.state.ui.preview = None;
                    super::DispatchResult {
                        effects: vec![Effect::Host(HostOp::PersistRoot(root)), Effect::RefreshTree],
                        state_changed: true,
                    }
                }
                Err(err) => self.fail(err),
            },
            _ => unreachable!("non-filesystem event passed to reduce_fs_event"),
        }
    }

    fn apply_fs_success(&mut self, op: &FsOp) {
        tracing::info!(op = ?op, "filesystem operation finished");
        let message = match op {
            FsOp::CreateFile(path) | FsOp::CreateDir(path) => {
                self.expand_parent(path);
                self.state.explorer.select_after_refresh(path.clone());
                let what = if matches!(op, FsOp::CreateDir(_)) {
                    "folder"
                } else {
                    "file"
                };
                format!("Created {what}: {}", file_name(path))
            }
            FsOp::Rename { from, to } => {
                let slot = std::mem::take(&mut self.state.clipboard);
                self.state.clipboard = slot.after_rename(from, to);
                self.state.explorer.move_path(from, to);
                if let Some(preview) = self.state.ui.preview.as_mut() {
                    if let Ok(rest) = preview.path.strip_prefix(from) {
                        preview.path = if rest.as_os_str().is_empty() {
                            to.clone()
                        } else {
                            to.join(rest)
                        };
                    }
                }
                format!("Renamed to: {}", file_name(to))
            }
            FsOp::Delete { path, .. } => {
                let slot = std::mem::take(&mut self.state.clipboard);
                self.state.clipboard = slot.after_delete(path);
                self.state.explorer.forget_path(path);
                if self
                    .state
                    .ui
                    .preview
                    .as_ref()
                    .is_some_and(|preview| preview.path.starts_with(path))
                {
                    self.state.ui.preview = None;
                }
                format!("Deleted: {}", file_name(path))
            }
            FsOp::Paste(plan) => {
                let slot = std::mem::take(&mut self.state.clipboard);
                self.state.clipboard = slot.after_paste(plan, true);
                if plan.action == ClipboardAction::Cut {
                    self.state.explorer.move_path(&plan.from, &plan.to);
                }
                self.expand_parent(&plan.to);
                self.state.explorer.select_after_refresh(plan.to.clone());
                format!("Pasted: {}", file_name(&plan.to))
            }
        };
        self.state.ui.notify(NotificationLevel::Info, message);
    }

    /// Make a new entry visible by expanding the folder it landed in.
    fn expand_parent(&mut self, path: &Path) {
        let Some(parent) = path.parent() else {
            return;
        };
        if self.state.root.as_deref() == Some(parent) {
            return;
        }
        self.state.explorer.expanded.insert(parent.to_path_buf());
    }
}

fn failure_prefix(op: &FsOp) -> &'static str {
    match op {
        FsOp::CreateFile(_) => "Failed to create file",
        FsOp::CreateDir(_) => "Failed to create folder",
        FsOp::Rename { .. } => "Failed to rename",
        FsOp::Delete { .. } => "Failed to delete",
        FsOp::Paste(_) => "Failed to paste",
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
