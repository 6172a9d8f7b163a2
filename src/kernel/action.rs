use std::path::PathBuf;
use std::time::Instant;

use crate::core::Command;
use crate::models::TreeNode;

use super::effect::{FsOp, HostOp};
use super::error::KernelError;
use super::preview::PreviewKind;
use super::state::NotificationLevel;
use super::tree_source::TreeSnapshot;

#[derive(Debug, Clone)]
pub enum Action {
    /// Session start: refresh, or warn once when no root is configured.
    Start,
    /// Runs against the explorer selection.
    RunCommand(Command),
    /// Runs against an explicit node; `None` means "no node" (root level).
    RunCommandOn {
        command: Command,
        target: Option<TreeNode>,
    },
    Notify {
        level: NotificationLevel,
        message: String,
    },
    ExplorerSetViewHeight {
        height: usize,
    },
    ExplorerMoveSelection {
        delta: isize,
    },
    ExplorerScroll {
        delta: isize,
    },
    ExplorerActivate,
    ExplorerCollapse,
    ExplorerClickRow {
        row: usize,
        now: Instant,
    },
    InputDialogAppend(char),
    InputDialogBackspace,
    InputDialogCursorLeft,
    InputDialogCursorRight,
    InputDialogAccept,
    InputDialogCancel,
    ConfirmDialogAccept,
    ConfirmDialogCancel,
    PaletteAppend(char),
    PaletteBackspace,
    PaletteMoveSelection(isize),
    PaletteConfirm,
    PaletteClose,
    PreviewScroll {
        delta: isize,
    },
    TreeRefreshed(TreeSnapshot),
    FsOpFinished {
        op: FsOp,
        result: Result<(), KernelError>,
    },
    HostOpFinished {
        op: HostOp,
        result: Result<(), KernelError>,
    },
    PreviewLoaded {
        path: PathBuf,
        kind: PreviewKind,
        result: Result<String, KernelError>,
    },
    RootResolved(Result<PathBuf, KernelError>),
}
