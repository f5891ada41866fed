//! # 设备状态与界面语言 Tauri Commands
//!
//! 提供连接状态和界面语言相关的 Tauri command 处理函数：
//! - `get_status` - 获取全部可观察状态的快照
//! - `get_supported_languages` - 获取语言选择器选项
//! - `change_language` - 切换界面语言并返回重建后的描述表
//! - `refresh_port` - 重新查询 EDL 端口并返回最新连接状态
//!
//! 协调器以 `tokio::sync::Mutex` 包装后注册为 Tauri managed state，
//! 所有 command 对协调器的访问因此被串行化，
//! 前端或后台轮询同时触发的多次 `refresh_port` 按加锁顺序依次执行。

use tauri::State;
use tokio::sync::Mutex;

use crate::models::descriptor::DescriptorTables;
use crate::models::language::{Language, LanguageOption, supported_languages};
use crate::models::status::{ConnectionState, StatusSnapshot};
use crate::services::coordinator::StatusCoordinator;

/// 注册为 Tauri managed state 的共享协调器
pub type SharedCoordinator = Mutex<StatusCoordinator>;

/// 获取协调器全部可观察状态的快照
///
/// 前端挂载时调用一次，之后通过 `status://changed` 事件接收增量更新。
#[tauri::command]
pub async fn get_status(state: State<'_, SharedCoordinator>) -> Result<StatusSnapshot, String> {
    Ok(state.lock().await.snapshot())
}

/// 获取语言选择器选项（代码 → 展示名称）
#[tauri::command]
pub fn get_supported_languages() -> Vec<LanguageOption> {
    supported_languages()
}

/// 切换界面语言
///
/// # 参数
/// - `code` - 语言代码；为空时按当前语言重建描述表
///
/// # 返回值
/// 重建后的两张描述表
///
/// # 错误
/// 语言代码不受支持时返回错误，协调器状态不变
#[tauri::command]
pub async fn change_language(
    code: Option<String>,
    state: State<'_, SharedCoordinator>,
) -> Result<DescriptorTables, String> {
    let language = code.as_deref().map(Language::parse).transpose()?;

    let mut coordinator = state.lock().await;
    coordinator.change_language(language);
    Ok(coordinator.descriptors().clone())
}

/// 重新查询 EDL 端口
///
/// # 返回值
/// 更新后的连接状态
///
/// # 错误
/// 设备层查询失败时返回错误信息，由前端负责展示
#[tauri::command]
pub async fn refresh_port(state: State<'_, SharedCoordinator>) -> Result<ConnectionState, String> {
    let mut coordinator = state.lock().await;
    coordinator.refresh_port().await?;
    Ok(coordinator.connection().clone())
}
