//! 笔记树剪贴板：最多一个待粘贴路径 + 动作标记（copy / cut）
//!
//! 状态转换都是纯函数，按值替换，不触碰文件系统。

use super::error::KernelError;
use std::path::{Path, PathBuf};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClipboardAction {
    Copy,
    Cut,
}

impl ClipboardAction {
    pub fn verb(self) -> &'static str {
        match self {
            ClipboardAction::Copy => "Copied",
            ClipboardAction::Cut => "Cut",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClipboardEntry {
    pub path: PathBuf,
    pub action: ClipboardAction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PastePlan {
    pub from: PathBuf,
    pub to: PathBuf,
    pub action: ClipboardAction,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClipboardSlot {
    entry: Option<ClipboardEntry>,
}

impl ClipboardSlot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entry(&self) -> Option<&ClipboardEntry> {
        self.entry.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    /// Copy or cut: the previous entry is replaced.
    pub fn stage(path: PathBuf, action: ClipboardAction) -> Self {
        Self {
            entry: Some(ClipboardEntry { path, action }),
        }
    }

    /// Destination is `target_dir/<basename of staged path>`. Existing entries
    /// there are not checked for; the filesystem primitive decides.
    pub fn plan_paste(&self, target_dir: &Path) -> Result<PastePlan, KernelError> {
        let entry = self.entry.as_ref().ok_or(KernelError::EmptyClipboard)?;
        let name = entry
            .path
            .file_name()
            .ok_or_else(|| KernelError::PathVanished(entry.path.clone()))?;
        let to = target_dir.join(name);
        if to == entry.path {
            return Err(KernelError::PasteOntoSource(entry.path.clone()));
        }
        if to.starts_with(&entry.path) {
            return Err(KernelError::PasteIntoSelf(entry.path.clone()));
        }
        Ok(PastePlan {
            from: entry.path.clone(),
            to,
            action: entry.action,
        })
    }

    /// Slot after a paste finished. A copy stays staged; a cut is consumed
    /// only when the move went through.
    pub fn after_paste(self, plan: &PastePlan, succeeded: bool) -> Self {
        match plan.action {
            ClipboardAction::Copy => self,
            ClipboardAction::Cut if succeeded && self.stages(&plan.from) => Self::empty(),
            ClipboardAction::Cut => self,
        }
    }

    /// Deleting the staged path (or a folder containing it) clears the slot.
    pub fn after_delete(self, deleted: &Path) -> Self {
        match &self.entry {
            Some(entry) if entry.path.starts_with(deleted) => Self::empty(),
            _ => self,
        }
    }

    /// A renamed cut source is dropped; a staged copy follows the rename.
    pub fn after_rename(self, from: &Path, to: &Path) -> Self {
        let Some(entry) = self.entry else {
            return self;
        };
        let Ok(rest) = entry.path.strip_prefix(from) else {
            return Self { entry: Some(entry) };
        };
        match entry.action {
            ClipboardAction::Cut => Self::empty(),
            ClipboardAction::Copy => {
                let path = if rest.as_os_str().is_empty() {
                    to.to_path_buf()
                } else {
                    to.join(rest)
                };
                Self::stage(path, ClipboardAction::Copy)
            }
        }
    }

    fn stages(&self, path: &Path) -> bool {
        self.entry.as_ref().is_some_and(|e| e.path == path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/clipboard.rs"]
mod tests;
