//! # 界面描述表数据模型
//!
//! 定义分区表格列（columns）和顶层标签页（tabs）两张描述表。
//!
//! 两张表的 key 集合与顺序是领域常量，只有 `label` 随界面语言变化。
//! 描述表是派生数据：切换语言时必须从模板整表重建，不能增量修补，
//! 以保证不会残留旧语言的标签。

use serde::Serialize;

/// 标签文本来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSource {
    /// 固定文本，不参与翻译（如复选框列的空标题、"LUN"）
    Literal(&'static str),
    /// 翻译 key（点分路径，如 `"part.name"`），重建时经翻译器解析
    Translated(&'static str),
}

/// 描述表模板条目：固定的 key、标签来源和布局提示
#[derive(Debug, Clone, Copy)]
pub struct DescriptorTemplate {
    pub key: &'static str,
    pub label: LabelSource,
    pub width: Option<&'static str>,
}

const fn column(
    key: &'static str,
    label: LabelSource,
    width: &'static str,
) -> DescriptorTemplate {
    DescriptorTemplate {
        key,
        label,
        width: Some(width),
    }
}

const fn tab(key: &'static str, label_key: &'static str) -> DescriptorTemplate {
    DescriptorTemplate {
        key,
        label: LabelSource::Translated(label_key),
        width: None,
    }
}

/// 分区表格列模板
pub const COLUMN_TEMPLATES: &[DescriptorTemplate] = &[
    column("chk", LabelSource::Literal(""), "5%"),
    column("lun", LabelSource::Literal("LUN"), "5%"),
    column("partName", LabelSource::Translated("part.name"), "10%"),
    column("partSize", LabelSource::Translated("part.size"), "10%"),
    column("partStart", LabelSource::Translated("part.start"), "10%"),
    column("partNum", LabelSource::Translated("part.num"), "10%"),
    column("imgPath", LabelSource::Translated("part.imgPath"), "40%"),
    column("sel", LabelSource::Translated("config.selectBtn"), "10%"),
];

/// 顶层标签页模板（标签页没有宽度提示）
pub const TAB_TEMPLATES: &[DescriptorTemplate] = &[
    tab("tab_part", "part.title"),
    tab("tab_edl", "edl.title"),
    tab("tab_adv", "advanced.title"),
    tab("tab_setting", "setting.title"),
];

/// 描述表中的一条记录
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface Descriptor {
///   key: string;
///   label: string;
///   width?: string;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    /// 在所属描述表内唯一的 key
    pub key: String,
    /// 已本地化的标签文本，可以为空
    pub label: String,
    /// 相对宽度（如 "10%"），仅表格列有此字段
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

/// 两张描述表的组合，总是作为一个整体被替换
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DescriptorTables {
    /// 分区表格列
    pub columns: Vec<Descriptor>,
    /// 顶层标签页
    pub tabs: Vec<Descriptor>,
}

impl DescriptorTables {
    /// 表格列的 key 序列
    pub fn column_keys(&self) -> Vec<&str> {
        self.columns.iter().map(|d| d.key.as_str()).collect()
    }

    /// 标签页的 key 序列
    pub fn tab_keys(&self) -> Vec<&str> {
        self.tabs.iter().map(|d| d.key.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_template_keys_are_unique() {
        for templates in [COLUMN_TEMPLATES, TAB_TEMPLATES] {
            let keys: HashSet<&str> = templates.iter().map(|t| t.key).collect();
            assert_eq!(keys.len(), templates.len());
        }
    }

    #[test]
    fn test_only_columns_carry_width() {
        assert!(COLUMN_TEMPLATES.iter().all(|t| t.width.is_some()));
        assert!(TAB_TEMPLATES.iter().all(|t| t.width.is_none()));
    }

    #[test]
    fn test_descriptor_serialization_skips_missing_width() {
        let tab = Descriptor {
            key: "tab_part".to_string(),
            label: "Partitions".to_string(),
            width: None,
        };
        let json = serde_json::to_value(&tab).unwrap();
        assert_eq!(json, serde_json::json!({ "key": "tab_part", "label": "Partitions" }));
    }
}
