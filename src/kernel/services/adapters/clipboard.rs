//! 剪贴板服务
//!
//! 封装系统剪贴板，只需要写入文本（复制路径）

use arboard::Clipboard;

pub struct ClipboardService {
    clipboard: Option<Clipboard>,
}

#[derive(Debug)]
pub enum ClipboardError {
    NotAvailable,
    SetFailed(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::NotAvailable => write!(f, "clipboard not available"),
            ClipboardError::SetFailed(e) => write!(f, "failed to write clipboard: {}", e),
        }
    }
}

impl std::error::Error for ClipboardError {}

impl ClipboardService {
    pub fn new() -> Self {
        let clipboard = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::warn!(error = %e, "system clipboard unavailable");
                None
            }
        };
        Self { clipboard }
    }

    pub fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = self
            .clipboard
            .as_mut()
            .ok_or(ClipboardError::NotAvailable)?;

        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::SetFailed(e.to_string()))
    }
}

impl Default for ClipboardService {
    fn default() -> Self {
        Self::new()
    }
}
