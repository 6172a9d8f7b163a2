//! 命令系统：语义命令定义
//!
//! - Command: 语义命令枚举（不关心具体按键）
//! - `urnote.*` 命令对应笔记树上的文件操作，可从命令面板或快捷键触发
//! - 其余命令是宿主界面的导航命令

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== 笔记树操作 ====================
    SelectRootFolder,
    NewFile,
    NewFolder,
    NewFileInRoot,
    NewFolderInRoot,
    OpenMarkdownPreview,
    ShowInOsExplorer,
    CopyPath,
    Copy,
    Cut,
    Paste,
    Rename,
    Delete,
    Refresh,

    // ==================== 树导航 ====================
    ExplorerUp,
    ExplorerDown,
    ExplorerPageUp,
    ExplorerPageDown,
    ExplorerActivate,
    ExplorerCollapse,

    // ==================== 预览 ====================
    PreviewScrollUp,
    PreviewScrollDown,
    ClosePreview,

    // ==================== 命令面板 ====================
    CommandPalette,
    PaletteUp,
    PaletteDown,
    PaletteConfirm,
    PaletteClose,

    // ==================== 系统操作 ====================
    Escape,
    Quit,

    // ==================== 扩展点 ====================
    Custom(String),
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::SelectRootFolder => "urnote.selectRootFolder",
            Command::NewFile => "urnote.newFile",
            Command::NewFolder => "urnote.newFolder",
            Command::NewFileInRoot => "urnote.newFileInRoot",
            Command::NewFolderInRoot => "urnote.newFolderInRoot",
            Command::OpenMarkdownPreview => "urnote.openMarkdownPreview",
            Command::ShowInOsExplorer => "urnote.showInOsExplorer",
            Command::CopyPath => "urnote.copyPath",
            Command::Copy => "urnote.copy",
            Command::Cut => "urnote.cut",
            Command::Paste => "urnote.paste",
            Command::Rename => "urnote.rename",
            Command::Delete => "urnote.delete",
            Command::Refresh => "urnote.refresh",
            Command::ExplorerUp => "explorerUp",
            Command::ExplorerDown => "explorerDown",
            Command::ExplorerPageUp => "explorerPageUp",
            Command::ExplorerPageDown => "explorerPageDown",
            Command::ExplorerActivate => "explorerActivate",
            Command::ExplorerCollapse => "explorerCollapse",
            Command::PreviewScrollUp => "previewScrollUp",
            Command::PreviewScrollDown => "previewScrollDown",
            Command::ClosePreview => "closePreview",
            Command::CommandPalette => "commandPalette",
            Command::PaletteUp => "paletteUp",
            Command::PaletteDown => "paletteDown",
            Command::PaletteConfirm => "paletteConfirm",
            Command::PaletteClose => "paletteClose",
            Command::Escape => "escape",
            Command::Quit => "quit",
            Command::Custom(name) => name,
        }
    }

    /// Inverse of [`Command::name`]. Unknown names become `Custom`.
    pub fn from_name(name: &str) -> Command {
        match name {
            "urnote.selectRootFolder" => Command::SelectRootFolder,
            "urnote.newFile" => Command::NewFile,
            "urnote.newFolder" => Command::NewFolder,
            "urnote.newFileInRoot" => Command::NewFileInRoot,
            "urnote.newFolderInRoot" => Command::NewFolderInRoot,
            "urnote.openMarkdownPreview" => Command::OpenMarkdownPreview,
            "urnote.showInOsExplorer" => Command::ShowInOsExplorer,
            "urnote.copyPath" => Command::CopyPath,
            "urnote.copy" => Command::Copy,
            "urnote.cut" => Command::Cut,
            "urnote.paste" => Command::Paste,
            "urnote.rename" => Command::Rename,
            "urnote.delete" => Command::Delete,
            "urnote.refresh" => Command::Refresh,
            "explorerUp" => Command::ExplorerUp,
            "explorerDown" => Command::ExplorerDown,
            "explorerPageUp" => Command::ExplorerPageUp,
            "explorerPageDown" => Command::ExplorerPageDown,
            "explorerActivate" => Command::ExplorerActivate,
            "explorerCollapse" => Command::ExplorerCollapse,
            "previewScrollUp" => Command::PreviewScrollUp,
            "previewScrollDown" => Command::PreviewScrollDown,
            "closePreview" => Command::ClosePreview,
            "commandPalette" => Command::CommandPalette,
            "paletteUp" => Command::PaletteUp,
            "paletteDown" => Command::PaletteDown,
            "paletteConfirm" => Command::PaletteConfirm,
            "paletteClose" => Command::PaletteClose,
            "escape" => Command::Escape,
            "quit" => Command::Quit,
            other => Command::Custom(other.to_string()),
        }
    }

    /// Title shown in the command palette, only for note-tree commands.
    pub fn title(&self) -> Option<&'static str> {
        let title = match self {
            Command::SelectRootFolder => "URNote: Select Root Folder",
            Command::NewFile => "URNote: New File",
            Command::NewFolder => "URNote: New Folder",
            Command::NewFileInRoot => "URNote: New File in Root",
            Command::NewFolderInRoot => "URNote: New Folder in Root",
            Command::OpenMarkdownPreview => "URNote: Open Preview",
            Command::ShowInOsExplorer => "URNote: Reveal in File Manager",
            Command::CopyPath => "URNote: Copy Path",
            Command::Copy => "URNote: Copy",
            Command::Cut => "URNote: Cut",
            Command::Paste => "URNote: Paste",
            Command::Rename => "URNote: Rename",
            Command::Delete => "URNote: Delete",
            Command::Refresh => "URNote: Refresh",
            _ => return None,
        };
        Some(title)
    }

    /// Commands that act on a tree node (or the root) and may touch the filesystem.
    pub fn is_note_command(&self) -> bool {
        self.title().is_some()
    }

    pub fn is_explorer_navigation(&self) -> bool {
        matches!(
            self,
            Command::ExplorerUp
                | Command::ExplorerDown
                | Command::ExplorerPageUp
                | Command::ExplorerPageDown
                | Command::ExplorerActivate
                | Command::ExplorerCollapse
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
