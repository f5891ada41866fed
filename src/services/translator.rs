//! # 翻译服务
//!
//! 将点分路径形式的翻译 key（如 `"part.name"`、`"config.selectBtn"`）解析为本地化文本。
//!
//! ## 回退链
//! 请求的语言 → 英语 → key 本身。
//! 翻译永远不会失败，也永远不会返回空字符串（除非翻译文件里本来就写的是空字符串）。
//!
//! ## 翻译文件
//! 四种语言的翻译文件位于仓库 `locales/` 目录，编译时通过 `include_str!` 嵌入二进制，
//! 运行时不依赖任何外部文件。

use std::collections::HashMap;

use serde_json::Value;

use crate::models::language::Language;

/// 翻译协作者
///
/// 同步查询，必须对任何 key 返回非失败的结果。
pub trait Translator: Send + Sync {
    fn translate(&self, language: Language, key: &str) -> String;
}

/// 闭包也可以作为翻译器，便于宿主接入其他翻译来源
impl<F> Translator for F
where
    F: Fn(Language, &str) -> String + Send + Sync,
{
    fn translate(&self, language: Language, key: &str) -> String {
        self(language, key)
    }
}

/// 编译时嵌入的翻译文件：(语言, JSON 文本)
const BUILTIN_CATALOGS: &[(Language, &str)] = &[
    (Language::En, include_str!("../../locales/en.json")),
    (Language::Ru, include_str!("../../locales/ru.json")),
    (Language::ZhCn, include_str!("../../locales/zh-CN.json")),
    (Language::ZhTw, include_str!("../../locales/zh-TW.json")),
];

/// 基于嵌套 JSON 对象的翻译目录
pub struct LocaleCatalog {
    /// 每种语言一棵翻译树
    tables: HashMap<Language, Value>,
}

impl LocaleCatalog {
    /// 加载内置的四种语言翻译文件
    ///
    /// # 错误
    /// 任一翻译文件不是合法 JSON 时返回错误
    pub fn builtin() -> Result<Self, String> {
        let mut tables = HashMap::with_capacity(BUILTIN_CATALOGS.len());
        for (language, source) in BUILTIN_CATALOGS {
            let tree: Value = serde_json::from_str(source)
                .map_err(|e| format!("解析 {} 翻译文件失败: {}", language, e))?;
            tables.insert(*language, tree);
        }
        Ok(Self { tables })
    }

    /// 由调用方提供的翻译树构造（未提供的语言全部走回退链）
    pub fn from_tables(tables: HashMap<Language, Value>) -> Self {
        Self { tables }
    }

    /// 在指定语言的翻译树中查找点分 key，只接受字符串叶子节点
    fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        let mut node = self.tables.get(&language)?;
        for segment in key.split('.') {
            node = node.get(segment)?;
        }
        node.as_str()
    }
}

impl Translator for LocaleCatalog {
    fn translate(&self, language: Language, key: &str) -> String {
        self.lookup(language, key)
            .or_else(|| self.lookup(Language::En, key))
            .map(str::to_string)
            .unwrap_or_else(|| {
                log::debug!("缺少翻译: [{}] {}", language, key);
                key.to_string()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::descriptor::{COLUMN_TEMPLATES, LabelSource, TAB_TEMPLATES};
    use crate::models::language::SUPPORTED_LANGUAGES;

    #[test]
    fn test_builtin_catalog_resolves_dotted_keys() {
        let catalog = LocaleCatalog::builtin().unwrap();
        assert_eq!(catalog.translate(Language::ZhCn, "part.name"), "分区名称");
        assert_eq!(catalog.translate(Language::ZhTw, "part.name"), "分割區名稱");
        assert_eq!(catalog.translate(Language::En, "config.selectBtn"), "Select");
        assert_eq!(
            catalog.translate(Language::ZhCn, "config.portStatusError"),
            "未找到EDL设备"
        );
    }

    #[test]
    fn test_every_descriptor_key_is_translated_in_every_language() {
        let catalog = LocaleCatalog::builtin().unwrap();
        let keys = COLUMN_TEMPLATES
            .iter()
            .chain(TAB_TEMPLATES)
            .filter_map(|t| match t.label {
                LabelSource::Translated(key) => Some(key),
                LabelSource::Literal(_) => None,
            })
            .chain(["config.portStatus", "config.portStatusError"]);
        for key in keys {
            for lang in SUPPORTED_LANGUAGES {
                assert!(
                    catalog.lookup(*lang, key).is_some(),
                    "{} 缺少翻译 {}",
                    lang,
                    key
                );
            }
        }
    }

    #[test]
    fn test_missing_translation_falls_back_to_english_then_key() {
        let mut tables = HashMap::new();
        tables.insert(Language::En, serde_json::json!({ "part": { "name": "Partition" } }));
        tables.insert(Language::Ru, serde_json::json!({ "part": {} }));
        let catalog = LocaleCatalog::from_tables(tables);

        assert_eq!(catalog.translate(Language::Ru, "part.name"), "Partition");
        assert_eq!(catalog.translate(Language::ZhTw, "part.name"), "Partition");
        assert_eq!(catalog.translate(Language::Ru, "part.size"), "part.size");
        // 非叶子节点不是翻译结果
        assert_eq!(catalog.translate(Language::En, "part"), "part");
    }

    #[test]
    fn test_closure_translator() {
        let t = |lang: Language, key: &str| format!("{}:{}", lang, key);
        assert_eq!(t.translate(Language::Ru, "part.size"), "ru:part.size");
    }
}
