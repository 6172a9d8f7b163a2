//! 核心类型
//!
//! - Event: 统一输入事件定义（与终端后端无关）
//! - Command: 语义命令

pub mod command;
pub mod event;

pub use command::Command;
pub use event::{InputEvent, Key, KeyCode, KeyModifiers};
