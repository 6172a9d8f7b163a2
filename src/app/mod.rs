//! 终端宿主：主题与工作台

pub mod theme;
mod workbench;

pub use theme::UiTheme;
pub use workbench::{EventResult, Workbench};
