//! # 应用配置数据模型
//!
//! 定义 EDL Flasher 的应用配置（AppConfig）。
//! 配置文件路径：`<config_dir>/edl-flasher/config.json`，由用户手动编辑，应用只读取不写回。
//!
//! 所有字段都有默认值，配置文件缺失或缺少字段时使用默认值。

use serde::{Deserialize, Serialize};

/// 日志级别
///
/// `debug` 会额外输出端口枚举细节和每次状态变更。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    /// 转换为 `log` crate 的级别过滤器
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
        }
    }
}

/// "跟随系统语言"的配置取值
pub const LANGUAGE_AUTO: &str = "auto";

/// 应用配置
///
/// 对应配置文件内容：
/// ```json
/// {
///   "logLevel": "info",
///   "language": "auto",
///   "portPollIntervalSecs": 2
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// 日志级别
    pub log_level: LogLevel,

    /// 界面语言
    ///
    /// `"auto"` 表示启动时按系统语言协商；
    /// 其他取值为语言代码，协商完成后覆盖协商结果（不受支持的代码会被忽略）。
    pub language: String,

    /// 端口轮询间隔（秒），为 0 时不启动后台轮询
    pub port_poll_interval_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            language: LANGUAGE_AUTO.to_string(),
            port_poll_interval_secs: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{ "logLevel": "debug" }"#).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.language, "auto");
        assert_eq!(config.port_poll_interval_secs, 2);
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Info.to_level_filter(), log::LevelFilter::Info);
        assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    }
}
