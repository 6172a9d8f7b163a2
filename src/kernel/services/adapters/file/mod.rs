//! 文件服务模块
//!
//! FileProvider 的本地实现 + 服务门面

pub mod local;
pub mod service;

pub use local::LocalFileProvider;
pub use service::FileService;
