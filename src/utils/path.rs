//! # 路径工具函数
//!
//! 提供与文件路径相关的工具函数：
//! - 获取 EDL Flasher 自身配置目录路径（`<config_dir>/edl-flasher/`）

use std::path::PathBuf;

/// 应用配置目录名
const APP_DIR_NAME: &str = "edl-flasher";

/// 获取应用配置目录的绝对路径
///
/// 使用 `dirs` crate 获取跨平台的用户配置目录。
///
/// # 错误
/// 如果无法确定用户配置目录（极端情况，如无 HOME 环境变量），返回错误信息。
///
/// # 示例
/// - Windows: `C:\Users\username\AppData\Roaming\edl-flasher`
/// - Linux: `/home/username/.config/edl-flasher`
/// - macOS: `/Users/username/Library/Application Support/edl-flasher`
pub fn get_app_config_dir() -> Result<PathBuf, String> {
    let config_dir = dirs::config_dir().ok_or_else(|| "无法获取用户配置目录".to_string())?;
    Ok(config_dir.join(APP_DIR_NAME))
}
