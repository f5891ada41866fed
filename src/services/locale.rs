//! # 系统语言查询与语言协商
//!
//! 启动时把操作系统配置的语言（如 `"en-US"`、`"zh-CN"`）协商为受支持的界面语言。
//!
//! ## 协商顺序（先命中者胜出）
//! 1. 完整的系统语言字符串本身是受支持的代码 → 原样使用（保留 `zh-CN` / `zh-TW` 地区变体）
//! 2. 提取出的字母前缀是受支持的代码 → 使用前缀（`"ru-RU"` → `"ru"`）
//! 3. 否则 → 默认语言 `en`
//!
//! 地区变体必须先于裸前缀尝试：`zh-CN` 和 `zh-TW` 共用前缀 `zh`，
//! 过早折叠到前缀会让其中一个变体永远无法选中。

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::models::language::Language;

/// 系统语言查询（外部协作者）
///
/// 查询可能挂起直到系统返回结果；失败时错误原样传播给调用方。
#[async_trait]
pub trait LocaleQuery: Send + Sync {
    /// 返回系统配置的语言字符串（如 `"en-US"`）
    async fn host_locale(&self) -> Result<String, String>;
}

/// 基于 `sys-locale` 的系统语言查询
pub struct SystemLocale;

#[async_trait]
impl LocaleQuery for SystemLocale {
    async fn host_locale(&self) -> Result<String, String> {
        sys_locale::get_locale().ok_or_else(|| "无法获取系统语言设置".to_string())
    }
}

/// 行首 ASCII 字母前缀匹配正则
static LEADING_ALPHA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+").unwrap());

/// 提取语言字符串开头的连续 ASCII 字母
///
/// 全函数，任何输入都有定义：
/// - `"en-US"` → `"en"`
/// - `"zh_Hant_TW"` → `"zh"`
/// - `"ru"`（已经是裸代码）→ `"ru"`
/// - `""` → `""`
/// - `"-US"` / `"123"`（无字母前缀）→ `""`
pub fn leading_alpha_prefix(locale: &str) -> &str {
    LEADING_ALPHA_RE
        .find(locale)
        .map(|m| m.as_str())
        .unwrap_or("")
}

/// 将系统语言字符串协商为受支持的界面语言
///
/// 先精确匹配，再前缀匹配，最后回退到 `Language::En`。
pub fn resolve_language(locale: &str) -> Language {
    if let Some(lang) = Language::from_code(locale) {
        return lang;
    }
    Language::from_code(leading_alpha_prefix(locale)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_alpha_prefix_edge_cases() {
        assert_eq!(leading_alpha_prefix("en-US"), "en");
        assert_eq!(leading_alpha_prefix("zh-CN"), "zh");
        assert_eq!(leading_alpha_prefix("zh_Hant_TW"), "zh");
        assert_eq!(leading_alpha_prefix("ru"), "ru");
        assert_eq!(leading_alpha_prefix(""), "");
        assert_eq!(leading_alpha_prefix("-US"), "");
        assert_eq!(leading_alpha_prefix("123abc"), "");
        // 只匹配 ASCII 字母
        assert_eq!(leading_alpha_prefix("русский"), "");
    }

    #[test]
    fn test_resolve_prefers_exact_regional_variant() {
        assert_eq!(resolve_language("zh-CN"), Language::ZhCn);
        assert_eq!(resolve_language("zh-TW"), Language::ZhTw);
    }

    #[test]
    fn test_resolve_falls_back_to_prefix() {
        assert_eq!(resolve_language("ru-RU"), Language::Ru);
        assert_eq!(resolve_language("en-GB"), Language::En);
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        // "zh" 本身不是受支持的代码，前缀匹配也落空
        assert_eq!(resolve_language("zh"), Language::En);
        assert_eq!(resolve_language("zh-HK"), Language::En);
        assert_eq!(resolve_language("fr-FR"), Language::En);
        assert_eq!(resolve_language(""), Language::En);
    }
}
