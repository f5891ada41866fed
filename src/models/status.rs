//! # 设备连接状态数据模型
//!
//! 定义 EDL 端口查询结果（PortDescriptor）、连接状态（ConnectionState）
//! 以及提供给前端的完整状态快照（StatusSnapshot）。

use serde::Serialize;

use crate::models::descriptor::DescriptorTables;
use crate::models::language::Language;

/// 设备层表示"未找到设备"的端口标识哨兵值
pub const PORT_NOT_FOUND: &str = "Not found";

/// 未找到设备时展示的端口名称占位符
pub const PORT_NAME_PLACEHOLDER: &str = "N/A";

/// 设备层返回的端口描述：`(端口标识, 端口名称)`
///
/// 端口标识为 `PORT_NOT_FOUND` 时表示当前没有 EDL 设备接入，
/// 此时端口名称的内容没有意义。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortDescriptor {
    /// 端口标识（如 Windows 上的 "COM7"，Linux 上的 "/dev/ttyUSB0"）
    pub id: String,
    /// 端口名称（USB 产品描述，如 "Qualcomm HS-USB QDLoader 9008"）
    pub name: String,
}

impl PortDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// 未找到设备时的端口描述
    pub fn not_found() -> Self {
        Self::new(PORT_NOT_FOUND, PORT_NAME_PLACEHOLDER)
    }

    pub fn is_not_found(&self) -> bool {
        self.id == PORT_NOT_FOUND
    }
}

/// 硬件连接的最近已知状态
///
/// 只由 `refresh_port` 修改，供界面读取。
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface ConnectionState {
///   statusText: string;
///   portName: string;
///   portId: string;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionState {
    /// 已本地化的连接状态文本
    pub status_text: String,
    /// 端口名称；未找到设备时固定为 "N/A"
    pub port_name: String,
    /// 端口标识；未找到设备时保留哨兵值 "Not found"
    pub port_id: String,
}

/// 协调器全部可观察状态的快照
///
/// 前端首次加载或重新挂载时一次性获取，之后依赖事件增量更新。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub connection: ConnectionState,
    pub selected_language: Language,
    pub descriptors: DescriptorTables,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_descriptor_not_found() {
        let port = PortDescriptor::not_found();
        assert!(port.is_not_found());
        assert_eq!(port.name, "N/A");
        assert!(!PortDescriptor::new("COM7", "Qualcomm HS-USB").is_not_found());
    }

    #[test]
    fn test_connection_state_serializes_camel_case() {
        let state = ConnectionState {
            status_text: "EDL device connected".to_string(),
            port_name: "Qualcomm HS-USB".to_string(),
            port_id: "COM7".to_string(),
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["statusText"], "EDL device connected");
        assert_eq!(json["portName"], "Qualcomm HS-USB");
        assert_eq!(json["portId"], "COM7");
    }
}
