//! 笔记树节点
//!
//! 节点只描述一个文件系统条目，不持有子节点；子节点由 `TreeDataSource` 按需列出。

use std::path::{Path, PathBuf};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Folder,
    File,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TreeNode {
    pub name: String,
    pub path: PathBuf,
    pub kind: NodeKind,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeIcon {
    Folder,
    File,
    Markdown,
}

/// What activating a row does in the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpenAction {
    OpenFile(PathBuf),
}

/// Display representation of a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeItem {
    pub label: String,
    pub icon: NodeIcon,
    pub collapsible: bool,
    pub open_action: Option<OpenAction>,
    /// Role tag used to enable commands: `folder`, `file` or `markdown`.
    pub context_value: &'static str,
}

pub const CONTEXT_FOLDER: &str = "folder";
pub const CONTEXT_FILE: &str = "file";
pub const CONTEXT_MARKDOWN: &str = "markdown";

impl TreeNode {
    pub fn new(name: impl Into<String>, path: PathBuf, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            path,
            kind,
        }
    }

    /// Build a node from a path, taking the name from its last component.
    pub fn from_path(path: PathBuf, kind: NodeKind) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        Self { name, path, kind }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    pub fn is_markdown(&self) -> bool {
        self.kind == NodeKind::File && is_markdown_path(&self.path)
    }

    /// The folder new entries go into when this node is the target:
    /// the folder itself, or the parent of a file.
    pub fn container_dir(&self) -> Option<&Path> {
        match self.kind {
            NodeKind::Folder => Some(self.path.as_path()),
            NodeKind::File => self.path.parent(),
        }
    }

    pub fn display(&self) -> TreeItem {
        match self.kind {
            NodeKind::Folder => TreeItem {
                label: self.name.clone(),
                icon: NodeIcon::Folder,
                collapsible: true,
                open_action: None,
                context_value: CONTEXT_FOLDER,
            },
            NodeKind::File => {
                let markdown = self.is_markdown();
                TreeItem {
                    label: self.name.clone(),
                    icon: if markdown {
                        NodeIcon::Markdown
                    } else {
                        NodeIcon::File
                    },
                    collapsible: false,
                    open_action: Some(OpenAction::OpenFile(self.path.clone())),
                    context_value: if markdown {
                        CONTEXT_MARKDOWN
                    } else {
                        CONTEXT_FILE
                    },
                }
            }
        }
    }
}

/// `Path::extension` treats a bare `.md` as a stem, so match on the name suffix.
pub fn is_markdown_path(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.to_ascii_lowercase().ends_with(".md"))
}

#[cfg(test)]
#[path = "../../tests/unit/models/tree_node.rs"]
mod tests;
