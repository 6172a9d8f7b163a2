//! 终端前端使用的宿主实现

use super::clipboard::{ClipboardError, ClipboardService};
use super::settings::save_root_folder_at;
use super::system;
use crate::kernel::services::ports::host::{Host, HostError};
use std::path::{Path, PathBuf};

pub struct SystemHost {
    clipboard: ClipboardService,
    settings_path: Option<PathBuf>,
}

impl SystemHost {
    pub fn new(settings_path: Option<PathBuf>) -> Self {
        Self {
            clipboard: ClipboardService::new(),
            settings_path,
        }
    }

    pub fn settings_path(&self) -> Option<&Path> {
        self.settings_path.as_deref()
    }
}

impl Host for SystemHost {
    fn write_clipboard(&mut self, text: &str) -> Result<(), HostError> {
        self.clipboard.set_text(text).map_err(|e| match e {
            ClipboardError::NotAvailable => HostError::ClipboardUnavailable,
            other => HostError::Clipboard(other.to_string()),
        })
    }

    fn reveal_in_os(&mut self, path: &Path) -> Result<(), HostError> {
        system::reveal(path).map_err(|e| HostError::Reveal(e.to_string()))
    }

    fn save_root_folder(&mut self, path: &Path) -> Result<(), HostError> {
        let Some(settings_path) = self.settings_path.as_deref() else {
            return Err(HostError::Settings(
                "no settings location available".to_string(),
            ));
        };
        save_root_folder_at(settings_path, path).map_err(|e| HostError::Settings(e.to_string()))?;
        tracing::info!(root = %path.display(), settings = %settings_path.display(), "root folder saved");
        Ok(())
    }
}
