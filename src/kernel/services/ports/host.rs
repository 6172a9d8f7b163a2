//! 宿主端口：内核需要、但只能由宿主环境提供的能力
//!
//! 终端前端用系统剪贴板 / 文件管理器 / settings.json 实现它，测试用记录型实现。

use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    ClipboardUnavailable,
    Clipboard(String),
    Reveal(String),
    Settings(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::ClipboardUnavailable => write!(f, "system clipboard is not available"),
            HostError::Clipboard(msg) => write!(f, "clipboard: {msg}"),
            HostError::Reveal(msg) => write!(f, "cannot open file manager: {msg}"),
            HostError::Settings(msg) => write!(f, "cannot save settings: {msg}"),
        }
    }
}

impl std::error::Error for HostError {}

pub trait Host {
    /// Put `text` on the system clipboard.
    fn write_clipboard(&mut self, text: &str) -> Result<(), HostError>;

    /// Show `path` in the OS file manager.
    fn reveal_in_os(&mut self, path: &Path) -> Result<(), HostError>;

    /// Persist the root folder so the next session starts there.
    fn save_root_folder(&mut self, path: &Path) -> Result<(), HostError>;
}

/// A host that accepts everything and does nothing. Used when no frontend is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl Host for NullHost {
    fn write_clipboard(&mut self, _text: &str) -> Result<(), HostError> {
        Ok(())
    }

    fn reveal_in_os(&mut self, _path: &Path) -> Result<(), HostError> {
        Ok(())
    }

    fn save_root_folder(&mut self, _path: &Path) -> Result<(), HostError> {
        Ok(())
    }
}
