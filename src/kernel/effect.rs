use std::path::PathBuf;

use super::clipboard::PastePlan;
use super::preview::PreviewKind;

/// One filesystem mutation. Each runs synchronously and reports back through
/// `Action::FsOpFinished`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsOp {
    CreateFile(PathBuf),
    CreateDir(PathBuf),
    Rename { from: PathBuf, to: PathBuf },
    Delete { path: PathBuf, is_dir: bool },
    Paste(PastePlan),
}

/// Requests that need the host rather than the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOp {
    CopyPath(PathBuf),
    Reveal(PathBuf),
    PersistRoot(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Re-list the root and every expanded folder.
    RefreshTree,
    Fs(FsOp),
    Host(HostOp),
    LoadPreview { path: PathBuf, kind: PreviewKind },
    /// Turn typed root input into an existing directory.
    ResolveRoot(String),
}
