//! # 状态变更通知
//!
//! 协调器的可观察字段是普通的 Rust 状态，每次变更完成后通过本模块显式发布事件。
//! 展示层（Tauri 事件转发、测试中的记录器等）注册监听器即可收到通知，
//! 不依赖任何特定的响应式运行时。
//!
//! 监听器在发布方的调用栈上同步执行，按注册顺序依次调用。

use serde::Serialize;

use crate::models::descriptor::DescriptorTables;
use crate::models::language::Language;
use crate::models::status::ConnectionState;

/// 协调器发布的状态变更事件
///
/// 序列化后作为 Tauri 事件负载发送给前端：
/// ```json
/// { "kind": "connectionChanged", "statusText": "...", "portName": "...", "portId": "..." }
/// { "kind": "languageChanged", "language": "zh-CN", "descriptors": { "columns": [], "tabs": [] } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CoordinatorEvent {
    /// `refresh_port` 完成，连接状态已整体更新
    ConnectionChanged(ConnectionState),
    /// `change_language` 完成，两张描述表已整表重建
    #[serde(rename_all = "camelCase")]
    LanguageChanged {
        language: Language,
        descriptors: DescriptorTables,
    },
}

/// 监听器回调
pub type Listener = Box<dyn Fn(&CoordinatorEvent) + Send + Sync>;

/// 订阅凭证，用于取消订阅
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// 监听器注册表
#[derive(Default)]
pub struct Notifier {
    /// 下一个分配的订阅 ID（单调递增，不复用）
    next_id: u64,
    /// 按注册顺序保存的监听器
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册监听器
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// 取消订阅，返回该订阅是否存在
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// 向所有监听器发布事件
    pub fn publish(&self, event: &CoordinatorEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }

    /// 是否没有任何监听器
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
