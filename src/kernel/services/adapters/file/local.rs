//! 本地文件系统 Provider
//!
//! 实现 FileProvider trait，操作本地文件系统

use crate::kernel::services::ports::file::{DirEntry, FileError, FileProvider, Result};
use std::fs;
use std::path::Path;

pub struct LocalFileProvider;

impl LocalFileProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> FileError + '_ {
    move |err| FileError::from_io(path, err)
}

fn copy_dir_all(from: &Path, to: &Path) -> Result<()> {
    // Existing destination directories are merged into.
    if !to.is_dir() {
        fs::create_dir(to).map_err(io_err(to))?;
    }
    for entry in fs::read_dir(from).map_err(io_err(from))? {
        let entry = entry.map_err(io_err(from))?;
        let src = entry.path();
        let dst = to.join(entry.file_name());
        let file_type = entry.file_type().map_err(io_err(&src))?;
        if file_type.is_dir() {
            copy_dir_all(&src, &dst)?;
        } else {
            fs::copy(&src, &dst).map_err(io_err(&src))?;
        }
    }
    Ok(())
}

impl FileProvider for LocalFileProvider {
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(path).map_err(io_err(path))? {
            let entry = entry.map_err(io_err(path))?;
            let entry_path = entry.path();
            let metadata = fs::symlink_metadata(&entry_path).map_err(io_err(&entry_path))?;

            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                path: entry_path,
                is_dir: metadata.is_dir(),
            });
        }

        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(FileError::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(FileError::NotAFile(path.to_path_buf()));
        }
        let bytes = fs::read(path).map_err(io_err(path))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn create_file(&self, path: &Path) -> Result<()> {
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(|_| ())
            .map_err(io_err(path))
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        fs::create_dir(path).map_err(io_err(path))
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        if fs::symlink_metadata(from).is_err() {
            return Err(FileError::NotFound(from.to_path_buf()));
        }
        fs::rename(from, to).map_err(io_err(to))
    }

    fn delete_file(&self, path: &Path) -> Result<()> {
        let meta = fs::symlink_metadata(path).map_err(io_err(path))?;
        if meta.is_dir() {
            return Err(FileError::NotAFile(path.to_path_buf()));
        }
        fs::remove_file(path).map_err(io_err(path))
    }

    fn delete_dir_all(&self, path: &Path) -> Result<()> {
        let meta = fs::symlink_metadata(path).map_err(io_err(path))?;
        if !meta.is_dir() {
            return Err(FileError::NotADirectory(path.to_path_buf()));
        }
        fs::remove_dir_all(path).map_err(io_err(path))
    }

    fn copy_recursive(&self, from: &Path, to: &Path) -> Result<()> {
        let meta = fs::metadata(from).map_err(io_err(from))?;
        if meta.is_dir() {
            return copy_dir_all(from, to);
        }
        fs::copy(from, to).map_err(io_err(from))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/file/local.rs"]
mod tests;
