//! 文件服务：包装一个 FileProvider
//!
//! 默认使用本地文件系统，测试可以注入自定义 Provider。

use super::local::LocalFileProvider;
use crate::kernel::services::ports::file::{DirEntry, FileProvider, Result};
use std::path::Path;

pub struct FileService {
    provider: Box<dyn FileProvider>,
}

impl FileService {
    pub fn new() -> Self {
        Self::with_provider(Box::new(LocalFileProvider::new()))
    }

    pub fn with_provider(provider: Box<dyn FileProvider>) -> Self {
        Self { provider }
    }

    pub fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        self.provider.read_dir(path)
    }

    pub fn read_file(&self, path: &Path) -> Result<String> {
        self.provider.read_file(path)
    }

    pub fn create_file(&self, path: &Path) -> Result<()> {
        tracing::debug!(path = %path.display(), "create file");
        self.provider.create_file(path)
    }

    pub fn create_dir(&self, path: &Path) -> Result<()> {
        tracing::debug!(path = %path.display(), "create dir");
        self.provider.create_dir(path)
    }

    pub fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        tracing::debug!(from = %from.display(), to = %to.display(), "rename");
        self.provider.rename(from, to)
    }

    /// Remove a file, or a directory with everything below it.
    pub fn delete(&self, path: &Path, is_dir: bool) -> Result<()> {
        tracing::debug!(path = %path.display(), is_dir, "delete");
        if is_dir {
            self.provider.delete_dir_all(path)
        } else {
            self.provider.delete_file(path)
        }
    }

    pub fn copy_recursive(&self, from: &Path, to: &Path) -> Result<()> {
        tracing::debug!(from = %from.display(), to = %to.display(), "copy");
        self.provider.copy_recursive(from, to)
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.provider.exists(path)
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.provider.is_dir(path)
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/file/service.rs"]
mod tests;
