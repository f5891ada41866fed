//! # 界面语言数据模型
//!
//! 定义应用支持的界面语言集合（SupportedLanguages）。
//! 语言集合是封闭的：只有下表中的语言代码可以成为"当前选中语言"。
//!
//! | 代码 | 显示名称 |
//! |------|----------|
//! | `en` | English |
//! | `ru` | Russian (русский язык) |
//! | `zh-CN` | Simplified Chinese (简体中文) |
//! | `zh-TW` | Traditional Chinese (正體中文) |
//!
//! `Language` 值只能由受支持的语言代码构造，
//! 因此"选中语言必须属于 SupportedLanguages"这一约束由类型系统保证。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 应用支持的界面语言
///
/// 序列化为语言代码字符串（如 `"zh-CN"`），与前端语言选择器的取值保持一致。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// 英语，同时也是语言协商失败时的默认语言
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "ru")]
    Ru,
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

/// 全部受支持语言，按语言选择器中的展示顺序排列
pub const SUPPORTED_LANGUAGES: &[Language] =
    &[Language::En, Language::Ru, Language::ZhCn, Language::ZhTw];

impl Language {
    /// 语言代码（SupportedLanguages 的 key）
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::ZhCn => "zh-CN",
            Language::ZhTw => "zh-TW",
        }
    }

    /// 语言选择器中展示的名称
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ru => "Russian (русский язык)",
            Language::ZhCn => "Simplified Chinese (简体中文)",
            Language::ZhTw => "Traditional Chinese (正體中文)",
        }
    }

    /// 按语言代码精确查找（区分大小写，不做任何规范化）
    ///
    /// `"zh"` 不是受支持的代码，返回 `None`；地区变体必须写全。
    pub fn from_code(code: &str) -> Option<Language> {
        SUPPORTED_LANGUAGES
            .iter()
            .copied()
            .find(|lang| lang.code() == code)
    }

    /// 解析调用方传入的语言代码
    ///
    /// 与 `from_code` 相同，但不受支持时返回错误信息，
    /// 供 IPC 层在调用 `change_language` 之前做校验。
    ///
    /// # 错误
    /// 语言代码不在 SupportedLanguages 中时返回错误
    pub fn parse(code: &str) -> Result<Language, String> {
        Language::from_code(code).ok_or_else(|| format!("不支持的语言代码: {}", code))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 语言选择器的单个选项
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface LanguageOption {
///   code: string;
///   name: string;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    /// 语言代码（如 "zh-CN"）
    pub code: &'static str,
    /// 展示名称（如 "Simplified Chinese (简体中文)"）
    pub name: &'static str,
}

/// 获取语言选择器的全部选项
pub fn supported_languages() -> Vec<LanguageOption> {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|lang| LanguageOption {
            code: lang.code(),
            name: lang.display_name(),
        })
        .collect()
}
