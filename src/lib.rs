//! # EDL Flasher - 应用核心初始化模块
//!
//! 本 crate 包含 EDL Flasher 桌面应用的原生逻辑：
//! - 连接状态与界面语言协调器（始终编译，可脱离 Tauri 单独测试）
//! - Tauri 应用启动流程（`desktop` 特性）：插件注册、commands 注册、
//!   协调器初始化、状态事件转发和端口轮询
//!
//! ## 模块结构
//! - `commands/` - Tauri command 处理函数（IPC 接口层，`desktop` 特性）
//! - `models/` - 数据模型（对应前端 TypeScript 类型）
//! - `services/` - 核心业务逻辑（协调器、设备查询、语言协商、翻译）
//! - `utils/` - 通用工具函数

#[cfg(feature = "desktop")]
mod commands;
pub mod models;
pub mod services;
mod utils;

pub use models::language::Language;
pub use services::coordinator::StatusCoordinator;
pub use services::notifier::{CoordinatorEvent, SubscriptionId};

/// 状态变更事件名：协调器每次发布事件都会以此名称转发给前端
#[cfg(feature = "desktop")]
pub const STATUS_EVENT: &str = "status://changed";

#[cfg(feature = "desktop")]
mod desktop {
    use std::sync::Arc;
    use std::time::Duration;

    use tauri::{AppHandle, Emitter, Manager};
    use tokio::sync::Mutex;
    use tokio::time::MissedTickBehavior;

    use crate::commands;
    use crate::commands::status::SharedCoordinator;
    use crate::models::config::AppConfig;
    use crate::services::config;
    use crate::services::coordinator::StatusCoordinator;
    use crate::services::device::SerialPortQuery;
    use crate::services::locale::SystemLocale;
    use crate::services::notifier::CoordinatorEvent;
    use crate::services::translator::LocaleCatalog;

    /// 在后台按固定间隔刷新 EDL 端口状态
    ///
    /// 每次刷新都经由共享协调器的锁，与前端触发的 `refresh_port` 串行执行。
    /// 刷新失败只记录警告，下一个周期继续尝试。
    fn spawn_port_polling(app: AppHandle, period: Duration) {
        tauri::async_runtime::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // 一次刷新耗时超过周期时顺延，不补发积压的 tick
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let state = app.state::<SharedCoordinator>();
                let mut coordinator = state.lock().await;
                if let Err(e) = coordinator.refresh_port().await {
                    log::warn!("刷新 EDL 端口失败: {}", e);
                }
            }
        });
    }

    /// Tauri 应用启动函数
    ///
    /// 1. 读取应用配置（失败时使用默认配置）
    /// 2. 按配置的日志级别注册日志插件
    /// 3. 构造协调器，注册状态事件转发监听器
    /// 4. 执行启动语言协商（系统语言获取失败时回退到英文）；配置指定了语言时覆盖协商结果
    /// 5. 注册协调器为 managed state，按配置启动端口轮询
    /// 6. 生成应用上下文并启动主事件循环
    ///
    /// # Panics
    /// 如果 Tauri 应用启动失败（例如配置文件缺失或窗口创建失败），
    /// 将通过 `.expect()` 触发 panic 并输出错误信息。
    #[cfg_attr(mobile, tauri::mobile_entry_point)]
    pub fn run() {
        tauri::Builder::default()
            .invoke_handler(tauri::generate_handler![
                commands::status::get_status,
                commands::status::get_supported_languages,
                commands::status::change_language,
                commands::status::refresh_port,
            ])
            .setup(|app| {
                let (app_config, config_error) =
                    match tauri::async_runtime::block_on(config::load_config()) {
                        Ok(c) => (c, None),
                        Err(e) => (AppConfig::default(), Some(e)),
                    };

                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(app_config.log_level.to_level_filter())
                        .build(),
                )?;
                if let Some(e) = config_error {
                    log::warn!("{}，使用默认配置", e);
                }

                let translator = Arc::new(LocaleCatalog::builtin()?);
                let mut coordinator = StatusCoordinator::new(
                    Box::new(SerialPortQuery),
                    Box::new(SystemLocale),
                    translator,
                );

                // 所有状态变更转发给前端
                let handle = app.handle().clone();
                coordinator.subscribe(Box::new(move |event: &CoordinatorEvent| {
                    if let Err(e) = handle.emit(crate::STATUS_EVENT, event) {
                        log::warn!("发送状态事件失败: {}", e);
                    }
                }));

                tauri::async_runtime::block_on(coordinator.initialize_or_default());

                if let Some(language) = config::language_override(&app_config) {
                    coordinator.change_language(Some(language));
                }

                app.manage::<SharedCoordinator>(Mutex::new(coordinator));

                if app_config.port_poll_interval_secs > 0 {
                    spawn_port_polling(
                        app.handle().clone(),
                        Duration::from_secs(app_config.port_poll_interval_secs),
                    );
                }
                Ok(())
            })
            // `tauri::generate_context!()` 宏：在编译时读取 `tauri.conf.json` 配置文件
            .run(tauri::generate_context!())
            .expect("error while running tauri application");
    }
}

#[cfg(feature = "desktop")]
pub use desktop::run;
