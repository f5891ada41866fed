//! # 应用配置加载服务
//!
//! 从 `<config_dir>/edl-flasher/config.json` 读取应用配置。
//! 配置文件不存在时返回默认配置；应用从不写回配置文件。

use std::path::Path;

use crate::models::config::{AppConfig, LANGUAGE_AUTO};
use crate::models::language::Language;
use crate::utils::path;

/// 从指定路径加载应用配置
///
/// # 参数
/// - `config_path` - 配置文件的绝对路径
///
/// # 返回值
/// 文件不存在时返回 `AppConfig::default()`
///
/// # 错误
/// 文件存在但无法读取或 JSON 解析失败时返回错误
pub async fn load_config_from(config_path: &Path) -> Result<AppConfig, String> {
    if !config_path.exists() {
        log::debug!("配置文件不存在，使用默认配置: {}", config_path.display());
        return Ok(AppConfig::default());
    }

    let content = tokio::fs::read_to_string(config_path)
        .await
        .map_err(|e| format!("读取配置文件失败: {}", e))?;

    serde_json::from_str(&content).map_err(|e| format!("解析配置文件失败: {}", e))
}

/// 从默认位置加载应用配置
///
/// # 错误
/// 无法确定配置目录，或配置文件存在但无法解析时返回错误
pub async fn load_config() -> Result<AppConfig, String> {
    let config_path = path::get_app_config_dir()?.join("config.json");
    load_config_from(&config_path).await
}

/// 解析配置中指定的界面语言
///
/// # 返回值
/// - `None` - 配置为 `"auto"`（跟随系统语言），或语言代码不受支持（记录警告后忽略）
/// - `Some(language)` - 配置指定了受支持的语言，应覆盖启动协商结果
pub fn language_override(config: &AppConfig) -> Option<Language> {
    if config.language == LANGUAGE_AUTO {
        return None;
    }

    let language = Language::from_code(&config.language);
    if language.is_none() {
        log::warn!("配置中的语言代码 {} 不受支持，已忽略", config.language);
    }
    language
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::LogLevel;

    fn config_with_language(language: &str) -> AppConfig {
        AppConfig {
            language: language.to_string(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_language_override_auto_follows_system() {
        assert_eq!(language_override(&AppConfig::default()), None);
        assert_eq!(language_override(&config_with_language("auto")), None);
    }

    #[test]
    fn test_language_override_supported_code() {
        assert_eq!(
            language_override(&config_with_language("zh-TW")),
            Some(Language::ZhTw)
        );
    }

    #[test]
    fn test_language_override_ignores_unsupported_code() {
        assert_eq!(language_override(&config_with_language("fr")), None);
        assert_eq!(language_override(&config_with_language("zh")), None);
    }

    #[tokio::test]
    async fn test_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.json")).await.unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[tokio::test]
    async fn test_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(
            &config_path,
            r#"{ "logLevel": "debug", "language": "zh-TW", "portPollIntervalSecs": 0 }"#,
        )
        .unwrap();

        let config = load_config_from(&config_path).await.unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.language, "zh-TW");
        assert_eq!(config.port_poll_interval_secs, 0);
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, "{ not json").unwrap();

        let err = load_config_from(&config_path).await.unwrap_err();
        assert!(err.starts_with("解析配置文件失败"));
    }
}
