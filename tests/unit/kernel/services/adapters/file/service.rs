use super::*;
use crate::kernel::services::ports::file::FileError;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_delete_dispatches_on_kind() {
    let dir = tempdir().unwrap();
    let service = FileService::new();

    let file = dir.path().join("a.md");
    fs::write(&file, "x").unwrap();
    let folder = dir.path().join("a");
    fs::create_dir_all(folder.join("b")).unwrap();

    service.delete(&file, false).unwrap();
    service.delete(&folder, true).unwrap();

    assert!(!service.exists(&file));
    assert!(!service.exists(&folder));
}

struct DenyAll;

impl FileProvider for DenyAll {
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        Err(FileError::PermissionDenied(path.to_path_buf()))
    }
    fn read_file(&self, path: &Path) -> Result<String> {
        Err(FileError::PermissionDenied(path.to_path_buf()))
    }
    fn create_file(&self, path: &Path) -> Result<()> {
        Err(FileError::PermissionDenied(path.to_path_buf()))
    }
    fn create_dir(&self, path: &Path) -> Result<()> {
        Err(FileError::PermissionDenied(path.to_path_buf()))
    }
    fn rename(&self, from: &Path, _to: &Path) -> Result<()> {
        Err(FileError::PermissionDenied(from.to_path_buf()))
    }
    fn delete_file(&self, path: &Path) -> Result<()> {
        Err(FileError::PermissionDenied(path.to_path_buf()))
    }
    fn delete_dir_all(&self, path: &Path) -> Result<()> {
        Err(FileError::PermissionDenied(path.to_path_buf()))
    }
    fn copy_recursive(&self, from: &Path, _to: &Path) -> Result<()> {
        Err(FileError::PermissionDenied(from.to_path_buf()))
    }
    fn exists(&self, _path: &Path) -> bool {
        false
    }
    fn is_dir(&self, _path: &Path) -> bool {
        false
    }
}

#[test]
fn test_custom_provider_is_used() {
    let service = FileService::with_provider(Box::new(DenyAll));
    let err = service.read_dir(Path::new("/notes")).unwrap_err();
    assert_eq!(err, FileError::PermissionDenied(PathBuf::from("/notes")));
}
