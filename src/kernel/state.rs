use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::models::TreeNode;

use super::clipboard::ClipboardSlot;
use super::effect::Effect;
use super::preview::{PreviewKind, PreviewLine};
use super::tree_source::{ExplorerRow, TreeSnapshot};

#[derive(Debug, Clone, Default)]
pub struct CommandPaletteState {
    pub visible: bool,
    pub query: String,
    pub selected: usize,
}

impl CommandPaletteState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputDialogKind {
    SelectRoot,
    NewFile {
        parent_dir: PathBuf,
    },
    NewFolder {
        parent_dir: PathBuf,
    },
    /// `extension` is put back onto whatever the user types.
    Rename {
        from: PathBuf,
        extension: Option<String>,
    },
}

#[derive(Debug, Clone, Default)]
pub struct InputDialogState {
    pub visible: bool,
    pub title: String,
    pub value: String,
    /// Byte index into `value`, always on a char boundary.
    pub cursor: usize,
    pub error: Option<String>,
    pub kind: Option<InputDialogKind>,
}

impl InputDialogState {
    pub fn open(&mut self, title: impl Into<String>, value: String, kind: InputDialogKind) {
        self.visible = true;
        self.title = title.into();
        self.cursor = value.len();
        self.value = value;
        self.error = None;
        self.kind = Some(kind);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeletePath { path: PathBuf, is_dir: bool },
}

#[derive(Debug, Clone, Default)]
pub struct ConfirmDialogState {
    pub visible: bool,
    pub message: String,
    pub on_confirm: Option<PendingAction>,
}

impl ConfirmDialogState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct PreviewState {
    pub path: PathBuf,
    pub kind: PreviewKind,
    pub lines: Vec<PreviewLine>,
    pub scroll: usize,
}

impl PreviewState {
    pub fn title(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        match self.kind {
            PreviewKind::Markdown => format!("Preview {name}"),
            PreviewKind::Plain => name,
        }
    }

    pub fn scroll(&mut self, delta: isize) -> bool {
        let max_scroll = self.lines.len().saturating_sub(1);
        let prev = self.scroll;
        if delta > 0 {
            self.scroll = (self.scroll + delta as usize).min(max_scroll);
        } else {
            self.scroll = self.scroll.saturating_sub((-delta) as usize);
        }
        self.scroll != prev
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub command_palette: CommandPaletteState,
    pub input_dialog: InputDialogState,
    pub confirm_dialog: ConfirmDialogState,
    pub preview: Option<PreviewState>,
    pub notifications: VecDeque<Notification>,
    /// The missing-root warning is only shown once per session.
    pub root_warning_shown: bool,
    pub should_quit: bool,
}

impl UiState {
    const MAX_NOTIFICATIONS: usize = 32;

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            NotificationLevel::Info => tracing::info!(%message, "notify"),
            NotificationLevel::Warning => tracing::warn!(%message, "notify"),
            NotificationLevel::Error => tracing::error!(%message, "notify"),
        }
        if self.notifications.len() == Self::MAX_NOTIFICATIONS {
            self.notifications.pop_front();
        }
        self.notifications.push_back(Notification { level, message });
    }

    pub fn latest_notification(&self) -> Option<&Notification> {
        self.notifications.back()
    }

    pub fn has_modal(&self) -> bool {
        self.input_dialog.visible || self.confirm_dialog.visible
    }
}

#[derive(Debug)]
pub struct AppState {
    pub root: Option<PathBuf>,
    /// Appended to new file names that have no extension.
    pub default_extension: String,
    pub explorer: ExplorerState,
    pub clipboard: ClipboardSlot,
    pub ui: UiState,
}

impl AppState {
    pub fn new(root: Option<PathBuf>, default_extension: impl Into<String>) -> Self {
        Self {
            root,
            default_extension: default_extension.into(),
            explorer: ExplorerState::new(),
            clipboard: ClipboardSlot::empty(),
            ui: UiState::default(),
        }
    }

    /// Where new entries and pastes go: the target folder, the parent of a
    /// target file, or the root.
    pub fn target_dir(&self, target: Option<&TreeNode>) -> Option<PathBuf> {
        target
            .and_then(TreeNode::container_dir)
            .map(Path::to_path_buf)
            .or_else(|| self.root.clone())
    }
}

#[derive(Debug)]
pub struct ExplorerState {
    pub rows: Vec<ExplorerRow>,
    pub expanded: FxHashSet<PathBuf>,
    pub view_height: usize,
    pub scroll_offset: usize,
    selected: Option<usize>,
    /// Selected once it shows up in a refresh, e.g. a freshly created file.
    pending_select: Option<PathBuf>,
    last_click: Option<(Instant, usize)>,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplorerState {
    const DOUBLE_CLICK_MS: u64 = 300;

    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            expanded: FxHashSet::default(),
            view_height: 10,
            scroll_offset: 0,
            selected: None,
            pending_select: None,
            last_click: None,
        }
    }

    /// Forget rows, selection and expansion, e.g. after the root changed.
    pub fn reset(&mut self) {
        let view_height = self.view_height;
        *self = Self::new();
        self.view_height = view_height;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_row(&self) -> Option<&ExplorerRow> {
        self.selected.and_then(|index| self.rows.get(index))
    }

    pub fn selected_node(&self) -> Option<&TreeNode> {
        self.selected_row().map(|row| &row.node)
    }

    pub fn select_after_refresh(&mut self, path: PathBuf) {
        self.pending_select = Some(path);
    }

    /// Replace the visible rows, keeping the selection on the same path when
    /// it is still listed.
    pub fn apply_snapshot(&mut self, snapshot: TreeSnapshot) -> bool {
        let prev_path = self.selected_node().map(|node| node.path.clone());
        let prev_index = self.selected;
        self.rows = snapshot.rows;
        self.last_click = None;

        let want = self.pending_select.take().or(prev_path);
        let found = want
            .as_ref()
            .and_then(|path| self.rows.iter().position(|row| &row.node.path == path));

        self.selected = match (found, prev_index) {
            (Some(index), _) => Some(index),
            (None, Some(index)) if !self.rows.is_empty() => Some(index.min(self.rows.len() - 1)),
            _ => None,
        };

        match self.selected {
            Some(index) => self.keep_row_visible(index),
            None => self.clamp_scroll(),
        }
        true
    }

    pub fn set_view_height(&mut self, height: usize) -> bool {
        let height = height.max(1);
        if self.view_height == height {
            return false;
        }
        self.view_height = height;

        match self.selected {
            Some(index) => self.keep_row_visible(index),
            None => self.clamp_scroll(),
        }
        true
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.rows.is_empty() || delta == 0 {
            return false;
        }

        let Some(current_index) = self.selected.filter(|i| *i < self.rows.len()) else {
            let new_index = if delta < 0 { self.rows.len() - 1 } else { 0 };
            self.selected = Some(new_index);
            self.keep_row_visible(new_index);
            return true;
        };

        let new_index = if delta < 0 {
            current_index.saturating_sub((-delta) as usize)
        } else {
            (current_index + delta as usize).min(self.rows.len() - 1)
        };

        if new_index == current_index {
            return false;
        }

        self.selected = Some(new_index);
        self.keep_row_visible(new_index);
        true
    }

    pub fn scroll(&mut self, delta: isize) -> bool {
        if self.rows.is_empty() || delta == 0 {
            return false;
        }

        let max_scroll = self.rows.len().saturating_sub(self.view_height.max(1));
        let prev = self.scroll_offset;

        if delta > 0 {
            self.scroll_offset = (self.scroll_offset + delta as usize).min(max_scroll);
        } else {
            self.scroll_offset = self.scroll_offset.saturating_sub((-delta) as usize);
        }

        self.scroll_offset != prev
    }

    /// Folders toggle their expansion, files open in the preview pane.
    pub fn activate_selected(&mut self) -> (bool, Vec<Effect>) {
        let Some(index) = self.selected else {
            return (false, Vec::new());
        };
        self.activate_row(index)
    }

    pub fn collapse_selected(&mut self) -> (bool, Vec<Effect>) {
        let Some(row) = self.selected_row() else {
            return (false, Vec::new());
        };

        if row.expanded {
            let path = row.node.path.clone();
            self.expanded.remove(&path);
            return (true, vec![Effect::RefreshTree]);
        }

        // Jump to the parent folder row.
        let Some(parent) = row.node.path.parent() else {
            return (false, Vec::new());
        };
        let parent = parent.to_path_buf();
        match self.rows.iter().position(|r| r.node.path == parent) {
            Some(index) => (self.select_row(index), Vec::new()),
            None => (false, Vec::new()),
        }
    }

    pub fn click_row(&mut self, row: usize, now: Instant) -> (bool, Vec<Effect>) {
        if row >= self.rows.len() {
            return (false, Vec::new());
        }

        let is_double_click = self
            .last_click
            .map(|(last_time, last_row)| {
                last_row == row
                    && now.duration_since(last_time).as_millis() as u64 <= Self::DOUBLE_CLICK_MS
            })
            .unwrap_or(false);

        if is_double_click {
            self.last_click = None;
            return self.activate_row(row);
        }

        self.last_click = Some((now, row));
        (self.select_row(row), Vec::new())
    }

    pub fn select_row(&mut self, row: usize) -> bool {
        if row >= self.rows.len() {
            return false;
        }
        let prev = self.selected;
        self.selected = Some(row);
        self.keep_row_visible(row);
        prev != Some(row)
    }

    /// Expansion entries under a deleted folder are dropped.
    pub fn forget_path(&mut self, path: &Path) {
        self.expanded.retain(|p| !p.starts_with(path));
    }

    /// Expansion entries under a renamed folder follow it.
    pub fn move_path(&mut self, from: &Path, to: &Path) {
        let moved: Vec<PathBuf> = self
            .expanded
            .iter()
            .filter(|p| p.starts_with(from))
            .cloned()
            .collect();
        for old in moved {
            self.expanded.remove(&old);
            if let Ok(rest) = old.strip_prefix(from) {
                self.expanded.insert(to.join(rest));
            }
        }
        if self.selected_node().is_some_and(|node| node.path == from) {
            self.pending_select = Some(to.to_path_buf());
        }
    }

    fn activate_row(&mut self, index: usize) -> (bool, Vec<Effect>) {
        let Some(row) = self.rows.get(index) else {
            return (false, Vec::new());
        };
        let path = row.node.path.clone();
        let is_folder = row.node.is_folder();
        let changed = self.select_row(index);

        if is_folder {
            if !self.expanded.remove(&path) {
                self.expanded.insert(path);
            }
            return (true, vec![Effect::RefreshTree]);
        }

        (
            changed,
            vec![Effect::LoadPreview {
                path,
                kind: PreviewKind::Plain,
            }],
        )
    }

    fn clamp_scroll(&mut self) {
        let view_height = self.view_height.max(1);
        let max_scroll = self.rows.len().saturating_sub(view_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    fn keep_row_visible(&mut self, row_index: usize) {
        let view_height = self.view_height.max(1);

        if row_index < self.scroll_offset {
            self.scroll_offset = row_index;
            self.clamp_scroll();
            return;
        }

        if row_index >= self.scroll_offset + view_height {
            self.scroll_offset = row_index.saturating_sub(view_height - 1);
        }

        self.clamp_scroll();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
