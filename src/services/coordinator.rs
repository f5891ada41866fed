//! # 连接状态与界面语言协调器
//!
//! 应用中唯一持有非平凡状态的单元，负责：
//! - **连接状态**：调用设备层查询 EDL 端口，更新状态文本、端口名称和端口标识
//! - **界面语言**：维护当前选中语言，语言变化时整表重建分区表格列和标签页描述表
//! - **启动协商**：启动时把系统语言协商为受支持的界面语言并完成首次描述表构建
//!
//! ## 生命周期
//! 1. `StatusCoordinator::new` 构造（连接状态为"未找到设备"，描述表为空）
//! 2. 宿主调用一次 `initialize()`，并等待其完成
//! 3. 之后按需调用 `change_language` / `refresh_port`
//!
//! ## 并发模型
//! 所有修改操作都需要 `&mut self`，协调器内部不加锁。
//! 同一个协调器上不会有两个 `refresh_port` 交错执行；
//! 需要跨线程共享时由宿主自行包装（桌面端使用 `tokio::sync::Mutex`）。
//! `change_language` 是同步操作，重建过程对读者不可见，读者只会看到旧表或新表。
//!
//! ## 错误处理
//! 设备查询和系统语言查询的失败原样传播给调用方，本单元不重试、不设超时、不做本地恢复。
//! "未找到设备"不是错误，而是 `refresh_port` 的正常结果。

use std::sync::Arc;

use crate::models::descriptor::{
    COLUMN_TEMPLATES, Descriptor, DescriptorTables, DescriptorTemplate, LabelSource,
    TAB_TEMPLATES,
};
use crate::models::language::{Language, LanguageOption, supported_languages};
use crate::models::status::{
    ConnectionState, PORT_NAME_PLACEHOLDER, PortDescriptor, StatusSnapshot,
};
use crate::services::device::DeviceQuery;
use crate::services::locale::{LocaleQuery, resolve_language};
use crate::services::notifier::{CoordinatorEvent, Listener, Notifier, SubscriptionId};
use crate::services::translator::Translator;

/// 设备已连接时的状态文本翻译 key
const KEY_PORT_CONNECTED: &str = "config.portStatus";

/// 未找到设备时的状态文本翻译 key
const KEY_PORT_NOT_FOUND: &str = "config.portStatusError";

/// 连接状态与界面语言协调器
pub struct StatusCoordinator {
    /// 连接状态（状态文本、端口名称、端口标识）
    connection: ConnectionState,
    /// 当前选中的界面语言
    selected_language: Language,
    /// 分区表格列和标签页描述表
    descriptors: DescriptorTables,
    /// 是否已完成启动协商
    initialized: bool,

    device: Box<dyn DeviceQuery>,
    locale: Box<dyn LocaleQuery>,
    translator: Arc<dyn Translator>,
    notifier: Notifier,
}

impl StatusCoordinator {
    /// 创建协调器
    ///
    /// 初始状态：默认语言（英语）下的"未找到设备"文本，端口名称 "N/A"，端口标识为空，
    /// 描述表为空，直到 `initialize()` 完成首次构建。
    pub fn new(
        device: Box<dyn DeviceQuery>,
        locale: Box<dyn LocaleQuery>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        let selected_language = Language::default();
        let connection = ConnectionState {
            status_text: translator.translate(selected_language, KEY_PORT_NOT_FOUND),
            port_name: PORT_NAME_PLACEHOLDER.to_string(),
            port_id: String::new(),
        };

        Self {
            connection,
            selected_language,
            descriptors: DescriptorTables::default(),
            initialized: false,
            device,
            locale,
            translator,
            notifier: Notifier::new(),
        }
    }

    // ======== 启动协商 ========

    /// 启动协商：查询系统语言，选定界面语言并完成首次描述表构建
    ///
    /// 必须在构造后调用且只调用一次，并在其完成后才能调用其他操作。
    ///
    /// # 返回值
    /// 协商得到的界面语言
    ///
    /// # 错误
    /// - 重复调用时返回错误，状态保持不变
    /// - 系统语言查询失败时原样返回错误，协调器保持未初始化状态
    pub async fn initialize(&mut self) -> Result<Language, String> {
        if self.initialized {
            return Err("协调器已完成初始化，不能重复初始化".to_string());
        }

        let host_locale = self.locale.host_locale().await?;
        let language = resolve_language(&host_locale);
        log::info!("系统语言 {:?} 协商为界面语言 {}", host_locale, language);

        self.selected_language = language;
        self.change_language(None);
        self.initialized = true;

        Ok(language)
    }

    /// 启动协商，系统语言查询失败时回退到默认语言
    ///
    /// 桌面端启动流程使用：查询失败只记录警告，以 `Language::En` 构建描述表并标记为已初始化，
    /// 应用照常启动。
    ///
    /// # 返回值
    /// `(最终选定的界面语言, 查询失败时的错误信息)`，错误信息交由宿主决定如何展示
    pub async fn initialize_or_default(&mut self) -> (Language, Option<String>) {
        if self.initialized {
            return (self.selected_language, None);
        }

        match self.initialize().await {
            Ok(language) => (language, None),
            Err(e) => {
                log::warn!("获取系统语言失败，使用默认语言 {}: {}", Language::En, e);
                self.change_language(Some(Language::En));
                self.initialized = true;
                (Language::En, Some(e))
            }
        }
    }

    /// 是否已完成启动协商
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // ======== 界面语言 ========

    /// 切换界面语言并整表重建两张描述表
    ///
    /// # 参数
    /// - `language` - 新语言；为 `None` 时使用当前选中语言重建
    ///
    /// 重建是整表替换，不会残留旧语言的标签。
    /// 不会重新本地化连接状态文本，它在下一次 `refresh_port` 时按新语言生成。
    pub fn change_language(&mut self, language: Option<Language>) {
        let language = language.unwrap_or(self.selected_language);
        self.selected_language = language;
        self.descriptors = DescriptorTables {
            columns: self.build_table(COLUMN_TEMPLATES),
            tabs: self.build_table(TAB_TEMPLATES),
        };
        log::debug!("界面语言切换为 {}，描述表已重建", language);

        self.notifier.publish(&CoordinatorEvent::LanguageChanged {
            language,
            descriptors: self.descriptors.clone(),
        });
    }

    /// 按模板构建一张描述表，翻译标签使用当前选中语言
    fn build_table(&self, templates: &[DescriptorTemplate]) -> Vec<Descriptor> {
        templates
            .iter()
            .map(|t| Descriptor {
                key: t.key.to_string(),
                label: match t.label {
                    LabelSource::Literal(text) => text.to_string(),
                    LabelSource::Translated(key) => {
                        self.translator.translate(self.selected_language, key)
                    }
                },
                width: t.width.map(str::to_string),
            })
            .collect()
    }

    // ======== 连接状态 ========

    /// 查询设备层并更新连接状态
    ///
    /// - 未找到设备：状态文本为"未找到设备"，端口名称强制为 "N/A"，端口标识保留哨兵值
    /// - 找到设备：状态文本为"设备已连接"，端口名称和标识原样采用设备层返回值
    ///
    /// 每次调用恰好更新一次连接状态，不触碰描述表。
    ///
    /// # 错误
    /// 设备查询失败时原样返回错误，连接状态保持不变
    pub async fn refresh_port(&mut self) -> Result<(), String> {
        let port = self.device.query_port().await?;
        self.apply_port(port);
        Ok(())
    }

    /// 将一次设备查询结果写入连接状态并发布事件
    fn apply_port(&mut self, port: PortDescriptor) {
        let connection = if port.is_not_found() {
            ConnectionState {
                status_text: self
                    .translator
                    .translate(self.selected_language, KEY_PORT_NOT_FOUND),
                port_name: PORT_NAME_PLACEHOLDER.to_string(),
                port_id: port.id,
            }
        } else {
            log::info!("EDL 设备已连接: {} ({})", port.id, port.name);
            ConnectionState {
                status_text: self
                    .translator
                    .translate(self.selected_language, KEY_PORT_CONNECTED),
                port_name: port.name,
                port_id: port.id,
            }
        };

        if connection != self.connection {
            log::debug!("连接状态变更: {:?}", connection);
        }
        self.connection = connection;
        self.notifier
            .publish(&CoordinatorEvent::ConnectionChanged(self.connection.clone()));
    }

    // ======== 读取状态 ========

    /// 已本地化的连接状态文本
    pub fn status_text(&self) -> &str {
        &self.connection.status_text
    }

    /// 端口名称；未找到设备时为 "N/A"
    pub fn port_name(&self) -> &str {
        &self.connection.port_name
    }

    /// 端口标识；未找到设备时为哨兵值 "Not found"，首次刷新前为空
    pub fn port_id(&self) -> &str {
        &self.connection.port_id
    }

    /// 完整的连接状态
    pub fn connection(&self) -> &ConnectionState {
        &self.connection
    }

    /// 当前选中的界面语言
    pub fn selected_language(&self) -> Language {
        self.selected_language
    }

    /// 两张描述表
    pub fn descriptors(&self) -> &DescriptorTables {
        &self.descriptors
    }

    /// 分区表格列描述表
    pub fn columns(&self) -> &[Descriptor] {
        &self.descriptors.columns
    }

    /// 顶层标签页描述表
    pub fn tabs(&self) -> &[Descriptor] {
        &self.descriptors.tabs
    }

    /// 语言选择器选项（代码 → 展示名称）
    pub fn supported_languages(&self) -> Vec<LanguageOption> {
        supported_languages()
    }

    /// 全部可观察状态的快照
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            connection: self.connection.clone(),
            selected_language: self.selected_language,
            descriptors: self.descriptors.clone(),
        }
    }

    // ======== 订阅 ========

    /// 注册状态变更监听器
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    /// 取消订阅，返回该订阅是否存在
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }
}
