//! 应用目录
//!
//! 跨平台的配置 / 日志目录：
//! - macOS: ~/Library/Application Support/urnote
//! - Linux: $XDG_CONFIG_HOME/urnote (~/.config/urnote), 日志在 $XDG_DATA_HOME/urnote/logs
//! - Windows: %APPDATA%\urnote
//!
//! `URNOTE_CONFIG_DIR` 覆盖配置目录。

use std::path::PathBuf;

pub const APP_NAME: &str = "urnote";
pub const CONFIG_DIR_ENV: &str = "URNOTE_CONFIG_DIR";
const LOG_DIR: &str = "logs";

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// 配置目录（settings.json 所在目录）
pub fn get_config_dir() -> Option<PathBuf> {
    config_dir_with(env_var)
}

/// 日志目录
pub fn get_log_dir() -> Option<PathBuf> {
    data_dir_with(env_var).map(|p| p.join(LOG_DIR))
}

pub(crate) fn config_dir_with(var: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    if let Some(dir) = var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    platform_config_dir(&var)
}

pub(crate) fn data_dir_with(var: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    platform_data_dir(&var)
}

#[cfg(target_os = "macos")]
fn platform_config_dir(var: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    var("HOME").map(|home| {
        PathBuf::from(home)
            .join("Library/Application Support")
            .join(APP_NAME)
    })
}

#[cfg(target_os = "macos")]
fn platform_data_dir(var: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    platform_config_dir(var)
}

#[cfg(target_os = "windows")]
fn platform_config_dir(var: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    var("APPDATA").map(|appdata| PathBuf::from(appdata).join(APP_NAME))
}

#[cfg(target_os = "windows")]
fn platform_data_dir(var: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    var("LOCALAPPDATA")
        .or_else(|| var("APPDATA"))
        .map(|dir| PathBuf::from(dir).join(APP_NAME))
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_config_dir(var: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    // 优先使用 XDG_CONFIG_HOME，否则使用 ~/.config
    if let Some(xdg) = var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg).join(APP_NAME));
    }
    var("HOME").map(|home| PathBuf::from(home).join(".config").join(APP_NAME))
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_data_dir(var: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    if let Some(xdg) = var("XDG_DATA_HOME") {
        return Some(PathBuf::from(xdg).join(APP_NAME));
    }
    var("HOME").map(|home| PathBuf::from(home).join(".local/share").join(APP_NAME))
}

/// 确保日志目录存在
pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/app_dirs.rs"]
mod tests;
