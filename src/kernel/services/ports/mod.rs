//! Service ports: traits + data contracts.

pub mod file;
pub mod host;
pub mod settings;

pub use file::{DirEntry, FileError, FileProvider, Result as FileResult};
pub use host::{Host, HostError, NullHost};
pub use settings::{ExplorerSettings, KeybindingRule, Settings, ThemeSettings};
