//! 命令边界上的错误分类
//!
//! 所有错误在 store 中被转换成通知，不会传播到事件循环。

use crate::kernel::services::ports::file::FileError;
use crate::kernel::services::ports::host::HostError;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// A prompt was left blank.
    EmptyInput,
    /// A name that would escape its folder (`a/b`, `..`).
    InvalidName(String),
    /// Paste with nothing staged.
    EmptyClipboard,
    Filesystem(FileError),
    /// The target was listed earlier but is gone now.
    PathVanished(PathBuf),
    NoRootFolder,
    NoSelection,
    NotADirectory(PathBuf),
    /// Paste destination lies inside the source folder.
    PasteIntoSelf(PathBuf),
    /// Paste destination is the source path itself.
    PasteOntoSource(PathBuf),
    Host(HostError),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::EmptyInput => write!(f, "Name cannot be empty"),
            KernelError::InvalidName(name) => write!(f, "Invalid name: {name}"),
            KernelError::EmptyClipboard => write!(f, "Nothing to paste"),
            KernelError::Filesystem(err) => write!(f, "{err}"),
            KernelError::PathVanished(path) => {
                write!(f, "Path no longer exists: {}", path.display())
            }
            KernelError::NoRootFolder => write!(
                f,
                "No root folder set. Please use \"URNote: Select Root Folder\" to set one."
            ),
            KernelError::NoSelection => write!(f, "Select a file or folder first"),
            KernelError::NotADirectory(path) => {
                write!(f, "Not a directory: {}", path.display())
            }
            KernelError::PasteIntoSelf(path) => {
                write!(f, "Cannot paste {} into itself", path.display())
            }
            KernelError::PasteOntoSource(path) => write!(
                f,
                "Cannot paste {}: the destination is the source itself",
                path.display()
            ),
            KernelError::Host(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for KernelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KernelError::Filesystem(err) => Some(err),
            KernelError::Host(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FileError> for KernelError {
    fn from(err: FileError) -> Self {
        KernelError::Filesystem(err)
    }
}

impl From<HostError> for KernelError {
    fn from(err: HostError) -> Self {
        KernelError::Host(err)
    }
}
