use super::*;

fn file(path: &str) -> TreeNode {
    TreeNode::from_path(PathBuf::from(path), NodeKind::File)
}

#[test]
fn markdown_is_derived_from_extension() {
    assert!(file("/notes/a.md").is_markdown());
    assert!(file("/notes/README.MD").is_markdown());
    assert!(!file("/notes/a.markdown").is_markdown());
    assert!(!file("/notes/md").is_markdown());
    assert!(!TreeNode::from_path(PathBuf::from("/notes/dir.md"), NodeKind::Folder).is_markdown());
}

#[test]
fn bare_md_name_is_markdown() {
    assert!(file("/notes/.md").is_markdown());
    assert!(file("/notes/.MD").is_markdown());
    assert_eq!(file("/notes/.md").display().context_value, "markdown");
}

#[test]
fn display_for_folder_is_collapsible_without_open_action() {
    let node = TreeNode::from_path(PathBuf::from("/notes/journal"), NodeKind::Folder);
    let item = node.display();
    assert_eq!(item.label, "journal");
    assert_eq!(item.icon, NodeIcon::Folder);
    assert!(item.collapsible);
    assert_eq!(item.open_action, None);
    assert_eq!(item.context_value, "folder");
}

#[test]
fn display_for_markdown_enables_preview() {
    let item = file("/notes/todo.md").display();
    assert_eq!(item.icon, NodeIcon::Markdown);
    assert!(!item.collapsible);
    assert_eq!(
        item.open_action,
        Some(OpenAction::OpenFile(PathBuf::from("/notes/todo.md")))
    );
    assert_eq!(item.context_value, "markdown");
}

#[test]
fn display_for_plain_file() {
    let item = file("/notes/data.csv").display();
    assert_eq!(item.icon, NodeIcon::File);
    assert_eq!(item.context_value, "file");
}

#[test]
fn container_dir_is_folder_or_parent() {
    let folder = TreeNode::from_path(PathBuf::from("/notes/a"), NodeKind::Folder);
    assert_eq!(folder.container_dir(), Some(Path::new("/notes/a")));
    assert_eq!(file("/notes/a/b.md").container_dir(), Some(Path::new("/notes/a")));
}
