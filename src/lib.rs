//! urnote - 终端笔记树
//!
//! 模块结构：
//! - core: 输入事件与语义命令
//! - models: 笔记树节点
//! - kernel: 状态 / action / effect，以及文件系统、设置、宿主等服务
//! - app: 终端工作台（渲染与输入分发）
//! - tui: crossterm 事件转换与终端恢复

pub mod core;
pub mod kernel;
pub mod models;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
