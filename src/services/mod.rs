//! # 业务逻辑服务模块
//!
//! 包含核心业务逻辑的实现，与 Tauri command 层解耦：
//! - `coordinator` - 连接状态与界面语言协调器
//! - `device` - EDL 端口查询（串口枚举）
//! - `locale` - 系统语言查询与语言协商
//! - `translator` - 翻译目录和翻译 key 解析
//! - `notifier` - 状态变更事件的订阅与发布
//! - `config` - 应用配置加载

pub mod config;
pub mod coordinator;
pub mod device;
pub mod locale;
pub mod notifier;
pub mod translator;
