use super::*;
use crate::models::NodeKind;

fn row(path: &str, kind: NodeKind, depth: u16, expanded: bool) -> ExplorerRow {
    ExplorerRow {
        node: TreeNode::from_path(PathBuf::from(path), kind),
        depth,
        expanded,
    }
}

fn snapshot_of(rows: Vec<ExplorerRow>) -> TreeSnapshot {
    TreeSnapshot {
        root: Some(PathBuf::from("/notes")),
        rows,
        failures: Vec::new(),
    }
}

fn three_rows() -> TreeSnapshot {
    snapshot_of(vec![
        row("/notes/a", NodeKind::Folder, 0, false),
        row("/notes/b.md", NodeKind::File, 0, false),
        row("/notes/c.txt", NodeKind::File, 0, false),
    ])
}

#[test]
fn move_selection_starts_at_edges_and_clamps() {
    let mut explorer = ExplorerState::new();
    explorer.apply_snapshot(three_rows());
    assert_eq!(explorer.selected(), None);

    assert!(explorer.move_selection(1));
    assert_eq!(explorer.selected(), Some(0));
    assert!(explorer.move_selection(10));
    assert_eq!(explorer.selected(), Some(2));
    assert!(!explorer.move_selection(1));

    let mut explorer = ExplorerState::new();
    explorer.apply_snapshot(three_rows());
    assert!(explorer.move_selection(-1));
    assert_eq!(explorer.selected(), Some(2));
}

#[test]
fn snapshot_keeps_selection_on_same_path() {
    let mut explorer = ExplorerState::new();
    explorer.apply_snapshot(three_rows());
    explorer.select_row(2);

    explorer.apply_snapshot(snapshot_of(vec![
        row("/notes/a", NodeKind::Folder, 0, false),
        row("/notes/aa.md", NodeKind::File, 0, false),
        row("/notes/b.md", NodeKind::File, 0, false),
        row("/notes/c.txt", NodeKind::File, 0, false),
    ]));

    assert_eq!(
        explorer.selected_node().map(|n| n.path.clone()),
        Some(PathBuf::from("/notes/c.txt"))
    );
}

#[test]
fn snapshot_clamps_selection_when_path_disappears() {
    let mut explorer = ExplorerState::new();
    explorer.apply_snapshot(three_rows());
    explorer.select_row(2);

    explorer.apply_snapshot(snapshot_of(vec![row("/notes/a", NodeKind::Folder, 0, false)]));
    assert_eq!(explorer.selected(), Some(0));

    explorer.apply_snapshot(snapshot_of(Vec::new()));
    assert_eq!(explorer.selected(), None);
    assert!(explorer.selected_node().is_none());
}

#[test]
fn pending_select_wins_over_previous_selection() {
    let mut explorer = ExplorerState::new();
    explorer.apply_snapshot(three_rows());
    explorer.select_row(0);
    explorer.select_after_refresh(PathBuf::from("/notes/c.txt"));

    explorer.apply_snapshot(three_rows());
    assert_eq!(explorer.selected(), Some(2));
}

#[test]
fn activate_folder_toggles_expansion_and_requests_refresh() {
    let mut explorer = ExplorerState::new();
    explorer.apply_snapshot(three_rows());
    explorer.select_row(0);

    let (changed, effects) = explorer.activate_selected();
    assert!(changed);
    assert_eq!(effects, vec![Effect::RefreshTree]);
    assert!(explorer.expanded.contains(Path::new("/notes/a")));

    let (_, effects) = explorer.activate_selected();
    assert_eq!(effects, vec![Effect::RefreshTree]);
    assert!(explorer.expanded.is_empty());
}

#[test]
fn activate_file_opens_plain_preview() {
    let mut explorer = ExplorerState::new();
    explorer.apply_snapshot(three_rows());
    explorer.select_row(1);

    let (_, effects) = explorer.activate_selected();
    assert_eq!(
        effects,
        vec![Effect::LoadPreview {
            path: PathBuf::from("/notes/b.md"),
            kind: PreviewKind::Plain,
        }]
    );
}

#[test]
fn collapse_on_child_jumps_to_parent_row() {
    let mut explorer = ExplorerState::new();
    explorer.expanded.insert(PathBuf::from("/notes/a"));
    explorer.apply_snapshot(snapshot_of(vec![
        row("/notes/a", NodeKind::Folder, 0, true),
        row("/notes/a/x.md", NodeKind::File, 1, false),
    ]));
    explorer.select_row(1);

    let (changed, effects) = explorer.collapse_selected();
    assert!(changed);
    assert!(effects.is_empty());
    assert_eq!(explorer.selected(), Some(0));

    let (changed, effects) = explorer.collapse_selected();
    assert!(changed);
    assert_eq!(effects, vec![Effect::RefreshTree]);
    assert!(explorer.expanded.is_empty());
}

#[test]
fn double_click_activates_row() {
    let mut explorer = ExplorerState::new();
    explorer.apply_snapshot(three_rows());
    let now = Instant::now();

    let (changed, effects) = explorer.click_row(0, now);
    assert!(changed);
    assert!(effects.is_empty());

    let (_, effects) = explorer.click_row(0, now);
    assert_eq!(effects, vec![Effect::RefreshTree]);
}

#[test]
fn selection_stays_visible_in_small_view() {
    let mut explorer = ExplorerState::new();
    let rows = (0..20)
        .map(|i| row(&format!("/notes/{i:02}.md"), NodeKind::File, 0, false))
        .collect();
    explorer.apply_snapshot(snapshot_of(rows));
    explorer.set_view_height(5);

    explorer.move_selection(1);
    explorer.move_selection(9);
    assert_eq!(explorer.selected(), Some(9));
    assert_eq!(explorer.scroll_offset, 5);

    explorer.move_selection(-9);
    assert_eq!(explorer.scroll_offset, 0);
}

#[test]
fn expansion_follows_renamed_folder_and_drops_deleted_one() {
    let mut explorer = ExplorerState::new();
    explorer.expanded.insert(PathBuf::from("/notes/a"));
    explorer.expanded.insert(PathBuf::from("/notes/a/inner"));
    explorer.expanded.insert(PathBuf::from("/notes/b"));

    explorer.move_path(Path::new("/notes/a"), Path::new("/notes/z"));
    assert!(explorer.expanded.contains(Path::new("/notes/z")));
    assert!(explorer.expanded.contains(Path::new("/notes/z/inner")));
    assert!(!explorer.expanded.contains(Path::new("/notes/a")));

    explorer.forget_path(Path::new("/notes/z"));
    assert_eq!(explorer.expanded.len(), 1);
    assert!(explorer.expanded.contains(Path::new("/notes/b")));
}

#[test]
fn notifications_are_bounded() {
    let mut ui = UiState::default();
    for i in 0..40 {
        ui.notify(NotificationLevel::Info, format!("n{i}"));
    }
    assert_eq!(ui.notifications.len(), 32);
    assert_eq!(ui.latest_notification().map(|n| n.message.as_str()), Some("n39"));
}

#[test]
fn target_dir_prefers_node_then_root() {
    let state = AppState::new(Some(PathBuf::from("/notes")), "md");
    let folder = TreeNode::from_path(PathBuf::from("/notes/a"), NodeKind::Folder);
    let file = TreeNode::from_path(PathBuf::from("/notes/a/x.md"), NodeKind::File);

    assert_eq!(state.target_dir(Some(&folder)), Some(PathBuf::from("/notes/a")));
    assert_eq!(state.target_dir(Some(&file)), Some(PathBuf::from("/notes/a")));
    assert_eq!(state.target_dir(None), Some(PathBuf::from("/notes")));

    let state = AppState::new(None, "md");
    assert_eq!(state.target_dir(None), None);
}

#[test]
fn preview_scroll_is_clamped() {
    let mut preview = PreviewState {
        path: PathBuf::from("/notes/a.md"),
        kind: PreviewKind::Markdown,
        lines: vec![PreviewLine::new(); 3],
        scroll: 0,
    };
    assert!(preview.scroll(10));
    assert_eq!(preview.scroll, 2);
    assert!(preview.scroll(-1));
    assert_eq!(preview.scroll, 1);
    assert!(preview.scroll(-5));
    assert_eq!(preview.scroll, 0);
    assert!(!preview.scroll(-1));
    assert_eq!(preview.title(), "Preview a.md");
}
