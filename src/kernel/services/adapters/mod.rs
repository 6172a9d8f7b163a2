//! Service adapters: OS specific implementations.

pub mod app_dirs;
#[cfg(feature = "tui")]
pub mod clipboard;
pub mod file;
#[cfg(feature = "tui")]
pub mod host;
pub mod keybinding;
pub mod settings;
pub mod system;

pub use app_dirs::{ensure_log_dir, get_config_dir, get_log_dir};
#[cfg(feature = "tui")]
pub use clipboard::{ClipboardError, ClipboardService};
pub use file::{FileService, LocalFileProvider};
#[cfg(feature = "tui")]
pub use host::SystemHost;
pub use keybinding::{KeybindingContext, KeybindingService};
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, load_settings_from, parse_keybinding,
    save_root_folder_at,
};
