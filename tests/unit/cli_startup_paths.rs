use tempfile::tempdir;

#[test]
fn resolve_startup_root_falls_back_to_settings() {
    let dir = tempdir().unwrap();
    let cwd = dir.path();
    let saved = cwd.join("saved");

    let root = super::resolve_startup_root(cwd, None, Some(saved.clone())).unwrap();
    assert_eq!(root, Some(saved));

    let root = super::resolve_startup_root(cwd, None, None).unwrap();
    assert_eq!(root, None);
}

#[test]
fn resolve_startup_root_accepts_relative_directory() {
    let dir = tempdir().unwrap();
    let cwd = dir.path();
    let notes = cwd.join("notes");
    std::fs::create_dir_all(&notes).unwrap();

    let root = super::resolve_startup_root(cwd, Some("notes"), Some(cwd.join("saved"))).unwrap();
    assert_eq!(root, Some(notes.canonicalize().unwrap()));
}

#[test]
fn resolve_startup_root_keeps_absolute_paths() {
    let dir = tempdir().unwrap();
    let notes = dir.path().join("notes");
    std::fs::create_dir_all(&notes).unwrap();

    let abs = notes.canonicalize().unwrap();
    let raw = abs.to_string_lossy().to_string();

    let other = tempdir().unwrap();
    let root = super::resolve_startup_root(other.path(), Some(&raw), None).unwrap();
    assert_eq!(root, Some(abs));
}

#[test]
fn resolve_startup_root_errors_for_missing_path() {
    let dir = tempdir().unwrap();

    let err = super::resolve_startup_root(dir.path(), Some("nope"), None).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn resolve_startup_root_rejects_files() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("a.md"), "# a\n").unwrap();

    let err = super::resolve_startup_root(dir.path(), Some("a.md"), None).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotADirectory);
}
