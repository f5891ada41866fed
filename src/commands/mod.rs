//! # Tauri Command 处理模块
//!
//! 本模块包含所有注册到 Tauri 的 command 处理函数：
//! - `status` - 设备连接状态和界面语言相关 commands

pub mod status;
