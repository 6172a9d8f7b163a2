//! 树数据源：按需列出一个目录的直接子项
//!
//! 没有常驻的树结构。每次刷新都从根目录和展开集合重新列出可见行。

use super::error::KernelError;
use crate::kernel::services::adapters::file::FileService;
use crate::models::{NodeKind, TreeNode};
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub struct TreeDataSource<'a> {
    files: &'a FileService,
    root: Option<&'a Path>,
}

impl<'a> TreeDataSource<'a> {
    pub fn new(files: &'a FileService, root: Option<&'a Path>) -> Self {
        Self { files, root }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root
    }

    /// `None` lists the root. Without a configured root the tree is empty.
    pub fn children(&self, node: Option<&TreeNode>) -> Result<Vec<TreeNode>, KernelError> {
        match node {
            Some(node) => self.list(&node.path),
            None => match self.root {
                Some(root) => self.list(root),
                None => Ok(Vec::new()),
            },
        }
    }

    pub fn list(&self, dir: &Path) -> Result<Vec<TreeNode>, KernelError> {
        let entries = self.files.read_dir(dir)?;
        let mut nodes: Vec<TreeNode> = entries
            .into_iter()
            .map(|entry| {
                let kind = if entry.is_dir {
                    NodeKind::Folder
                } else {
                    NodeKind::File
                };
                TreeNode::new(entry.name, entry.path, kind)
            })
            .collect();
        nodes.sort_by_cached_key(SortKey::new);
        Ok(nodes)
    }
}

/// Folders first, then by name the way a file manager collates: accents and
/// case are ignored at first, then unaccented before accented, then lowercase
/// before uppercase. The raw name breaks any remaining tie.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct SortKey {
    rank: u8,
    base: String,
    accents: String,
    case: Vec<bool>,
    raw: String,
}

impl SortKey {
    fn new(node: &TreeNode) -> Self {
        let rank = match node.kind {
            NodeKind::Folder => 0,
            NodeKind::File => 1,
        };
        let name = node.name.as_str();
        Self {
            rank,
            base: name
                .nfd()
                .filter(|ch| !is_combining_mark(*ch))
                .flat_map(char::to_lowercase)
                .collect(),
            accents: name.nfd().flat_map(char::to_lowercase).collect(),
            case: name.chars().map(char::is_uppercase).collect(),
            raw: name.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorerRow {
    pub node: TreeNode,
    pub depth: u16,
    pub expanded: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingFailure {
    pub path: PathBuf,
    pub error: KernelError,
}

/// Visible rows for a root and a set of expanded folders, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeSnapshot {
    pub root: Option<PathBuf>,
    pub rows: Vec<ExplorerRow>,
    pub failures: Vec<ListingFailure>,
}

pub fn snapshot(source: &TreeDataSource<'_>, expanded: &FxHashSet<PathBuf>) -> TreeSnapshot {
    let mut out = TreeSnapshot {
        root: source.root().map(Path::to_path_buf),
        ..TreeSnapshot::default()
    };
    let Some(root) = source.root() else {
        return out;
    };

    let mut stack: Vec<(TreeNode, u16)> = Vec::new();
    push_children(source, root, 0, &mut stack, &mut out.failures);

    while let Some((node, depth)) = stack.pop() {
        let is_expanded = node.is_folder() && expanded.contains(&node.path);
        if is_expanded {
            push_children(source, &node.path, depth + 1, &mut stack, &mut out.failures);
        }
        out.rows.push(ExplorerRow {
            node,
            depth,
            expanded: is_expanded,
        });
    }

    out
}

fn push_children(
    source: &TreeDataSource<'_>,
    dir: &Path,
    depth: u16,
    stack: &mut Vec<(TreeNode, u16)>,
    failures: &mut Vec<ListingFailure>,
) {
    match source.list(dir) {
        Ok(children) => {
            for child in children.into_iter().rev() {
                stack.push((child, depth));
            }
        }
        Err(error) => {
            tracing::warn!(path = %dir.display(), error = %error, "list directory failed");
            failures.push(ListingFailure {
                path: dir.to_path_buf(),
                error,
            });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/tree_source.rs"]
mod tests;
