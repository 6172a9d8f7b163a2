//! 文件系统抽象：Provider trait + 数据契约

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, FileError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileError {
    NotFound(PathBuf),
    AlreadyExists(PathBuf),
    PermissionDenied(PathBuf),
    NotADirectory(PathBuf),
    NotAFile(PathBuf),
    Io { path: PathBuf, message: String },
}

impl FileError {
    /// Attach the path an OS error happened on, keeping the common kinds typed.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => FileError::NotFound(path),
            io::ErrorKind::AlreadyExists => FileError::AlreadyExists(path),
            io::ErrorKind::PermissionDenied => FileError::PermissionDenied(path),
            _ => FileError::Io {
                path,
                message: err.to_string(),
            },
        }
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::NotFound(p) => write!(f, "no such file or directory: {}", p.display()),
            FileError::AlreadyExists(p) => write!(f, "already exists: {}", p.display()),
            FileError::PermissionDenied(p) => write!(f, "permission denied: {}", p.display()),
            FileError::NotADirectory(p) => write!(f, "not a directory: {}", p.display()),
            FileError::NotAFile(p) => write!(f, "not a file: {}", p.display()),
            FileError::Io { path, message } => write!(f, "{}: {}", path.display(), message),
        }
    }
}

impl std::error::Error for FileError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// 文件系统后端。所有调用都是同步的，由单线程事件循环串行调用。
pub trait FileProvider {
    /// Immediate children of `path`, unsorted. Kind comes from `lstat`.
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    fn read_file(&self, path: &Path) -> Result<String>;

    /// Create an empty file. Never truncates an existing one.
    fn create_file(&self, path: &Path) -> Result<()>;

    /// Create one directory. Missing parents are an error.
    fn create_dir(&self, path: &Path) -> Result<()>;

    fn rename(&self, from: &Path, to: &Path) -> Result<()>;

    fn delete_file(&self, path: &Path) -> Result<()>;

    fn delete_dir_all(&self, path: &Path) -> Result<()>;

    /// Duplicate a file, or a directory with its whole subtree.
    fn copy_recursive(&self, from: &Path, to: &Path) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/file.rs"]
mod tests;
