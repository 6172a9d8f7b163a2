//! 会话：把 store 产生的 effect 同步执行完，再把结果作为 action 送回 store
//!
//! 一个输入事件对应的全部 effect 和后续 action 都在 `dispatch` 内排空，
//! 事件循环读取下一个事件之前状态已经稳定。

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::kernel::services::adapters::file::FileService;
use crate::kernel::services::ports::{FileError, Host};
use crate::models::TreeNode;

use super::clipboard::ClipboardAction;
use super::effect::{FsOp, HostOp};
use super::tree_source::{snapshot, TreeDataSource};
use super::{Action, AppState, Effect, KernelError, NotificationLevel, Store};

pub struct Session<H: Host> {
    store: Store,
    files: FileService,
    host: H,
    cwd: PathBuf,
    home: Option<PathBuf>,
}

impl<H: Host> Session<H> {
    pub fn new(state: AppState, files: FileService, host: H) -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        let home = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self {
            store: Store::new(state),
            files,
            host,
            cwd,
            home,
        }
    }

    /// Override the directories used to resolve typed root paths.
    pub fn with_dirs(mut self, cwd: PathBuf, home: Option<PathBuf>) -> Self {
        self.cwd = cwd;
        self.home = home;
        self
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn files(&self) -> &FileService {
        &self.files
    }

    pub fn start(&mut self) -> bool {
        self.dispatch(Action::Start)
    }

    /// Run `action` and everything it triggers. Returns whether anything
    /// visible changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let mut queue = VecDeque::from([action]);
        let mut state_changed = false;
        while let Some(action) = queue.pop_front() {
            let result = self.store.dispatch(action);
            state_changed |= result.state_changed;
            for effect in result.effects {
                queue.push_back(self.run_effect(effect));
            }
        }
        state_changed
    }

    /// Children of `node` (the root for `None`), sorted for display. A listing
    /// failure shows up as a notification and an empty result.
    pub fn list_children(&mut self, node: Option<&TreeNode>) -> Vec<TreeNode> {
        let root = self.store.state().root.clone();
        let listed = TreeDataSource::new(&self.files, root.as_deref()).children(node);
        match listed {
            Ok(children) => children,
            Err(err) => {
                let path = node.map(|n| n.path.clone()).or(root).unwrap_or_default();
                self.dispatch(Action::Notify {
                    level: NotificationLevel::Error,
                    message: format!("Failed to list {}: {err}", path.display()),
                });
                Vec::new()
            }
        }
    }

    fn run_effect(&mut self, effect: Effect) -> Action {
        match effect {
            Effect::RefreshTree => {
                let state = self.store.state();
                let source = TreeDataSource::new(&self.files, state.root.as_deref());
                Action::TreeRefreshed(snapshot(&source, &state.explorer.expanded))
            }
            Effect::Fs(op) => {
                let result = self.run_fs_op(&op).map_err(KernelError::from);
                Action::FsOpFinished { op, result }
            }
            Effect::Host(op) => {
                let result = self.run_host_op(&op);
                Action::HostOpFinished { op, result }
            }
            Effect::LoadPreview { path, kind } => {
                let result = self.files.read_file(&path).map_err(KernelError::from);
                Action::PreviewLoaded { path, kind, result }
            }
            Effect::ResolveRoot(input) => {
                let path = resolve_root_input(&input, &self.cwd, self.home.as_deref());
                let result = if !self.files.exists(&path) {
                    Err(KernelError::Filesystem(FileError::NotFound(path)))
                } else if !self.files.is_dir(&path) {
                    Err(KernelError::NotADirectory(path))
                } else {
                    Ok(path)
                };
                Action::RootResolved(result)
            }
        }
    }

    fn run_fs_op(&mut self, op: &FsOp) -> Result<(), FileError> {
        match op {
            FsOp::CreateFile(path) => self.files.create_file(path),
            FsOp::CreateDir(path) => self.files.create_dir(path),
            FsOp::Rename { from, to } => self.files.rename(from, to),
            FsOp::Delete { path, is_dir } => self.files.delete(path, *is_dir),
            FsOp::Paste(plan) => match plan.action {
                ClipboardAction::Copy => self.files.copy_recursive(&plan.from, &plan.to),
                ClipboardAction::Cut => self.files.rename(&plan.from, &plan.to),
            },
        }
    }

    fn run_host_op(&mut self, op: &HostOp) -> Result<(), KernelError> {
        match op {
            HostOp::CopyPath(path) => {
                if !self.files.exists(path) {
                    return Err(KernelError::PathVanished(path.clone()));
                }
                self.host.write_clipboard(&path.to_string_lossy())?;
            }
            HostOp::Reveal(path) => {
                if !self.files.exists(path) {
                    return Err(KernelError::PathVanished(path.clone()));
                }
                self.host.reveal_in_os(path)?;
            }
            HostOp::PersistRoot(path) => self.host.save_root_folder(path)?,
        }
        Ok(())
    }
}

/// `~` is the home directory; relative input is taken from `cwd`.
pub fn resolve_root_input(input: &str, cwd: &Path, home: Option<&Path>) -> PathBuf {
    let input = input.trim();
    let expanded = match (home, input.strip_prefix('~')) {
        (Some(home), Some("")) => home.to_path_buf(),
        (Some(home), Some(rest)) if rest.starts_with('/') || rest.starts_with('\\') => {
            home.join(&rest[1..])
        }
        _ => PathBuf::from(input),
    };
    if expanded.is_absolute() {
        expanded
    } else {
        cwd.join(expanded)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;
