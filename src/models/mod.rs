//! # 数据模型模块
//!
//! 定义了与前端 TypeScript 类型一一对应的 Rust 数据结构。
//! 需要跨 IPC 传输的结构体派生 `Serialize`，配置文件结构体同时派生 `Deserialize`。
//! - `language` - 受支持的界面语言集合
//! - `descriptor` - 分区表格列和标签页描述表
//! - `status` - 端口查询结果、连接状态和状态快照
//! - `config` - 应用配置

pub mod config;
pub mod descriptor;
pub mod language;
pub mod status;
