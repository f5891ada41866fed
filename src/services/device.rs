//! # EDL 端口查询服务
//!
//! 查找当前接入的 EDL（高通紧急下载模式）设备所在的串口。
//!
//! ## 选择规则
//! 1. 只考虑 USB 串口，PCI / 蓝牙 / 未知类型端口全部忽略
//! 2. 存在高通 EDL 端口（VID `05C6`，PID `9008`）时优先选择，多个时取最后枚举到的
//! 3. 否则取最后枚举到的 USB 串口
//! 4. 没有任何 USB 串口时返回 `("Not found", "N/A")`
//!
//! 端口名称取自 USB 产品描述字符串，缺失时为空字符串。
//!
//! ## 线程模型
//! `serialport::available_ports` 是同步调用（Windows 上会查询 SetupAPI），
//! 因此放到 tokio 的阻塞线程池中执行，避免阻塞异步运行时。

use async_trait::async_trait;
use serialport::SerialPortType;

use crate::models::status::PortDescriptor;

/// 高通 USB 厂商 ID
pub const QUALCOMM_VID: u16 = 0x05C6;

/// 高通 EDL 模式（QDLoader 9008）产品 ID
pub const EDL_PID: u16 = 0x9008;

/// 设备查询（外部协作者）
///
/// 查询耗时由设备层决定，协调器不设超时；失败时错误原样传播给调用方。
#[async_trait]
pub trait DeviceQuery: Send + Sync {
    /// 返回当前 EDL 端口；没有设备时返回 `PortDescriptor::not_found()`
    async fn query_port(&self) -> Result<PortDescriptor, String>;
}

/// 枚举到的一个 USB 串口
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsbCandidate {
    /// 系统端口名（如 "COM7"、"/dev/ttyUSB0"）
    pub port_name: String,
    pub vid: u16,
    pub pid: u16,
    /// USB 产品描述字符串
    pub product: Option<String>,
}

impl UsbCandidate {
    fn is_edl(&self) -> bool {
        self.vid == QUALCOMM_VID && self.pid == EDL_PID
    }
}

/// 按选择规则从候选 USB 串口中挑出 EDL 端口
pub fn select_port(candidates: &[UsbCandidate]) -> PortDescriptor {
    let chosen = candidates
        .iter()
        .rev()
        .find(|c| c.is_edl())
        .or_else(|| candidates.last());

    match chosen {
        Some(c) => PortDescriptor::new(
            c.port_name.clone(),
            c.product.clone().unwrap_or_default(),
        ),
        None => PortDescriptor::not_found(),
    }
}

/// 基于 `serialport` 的设备查询实现
pub struct SerialPortQuery;

impl SerialPortQuery {
    /// 同步枚举系统串口，只保留 USB 串口
    fn enumerate_usb_ports() -> Result<Vec<UsbCandidate>, String> {
        let ports = serialport::available_ports().map_err(|e| format!("枚举串口失败: {}", e))?;

        let candidates = ports
            .into_iter()
            .filter_map(|p| match p.port_type {
                SerialPortType::UsbPort(info) => Some(UsbCandidate {
                    port_name: p.port_name,
                    vid: info.vid,
                    pid: info.pid,
                    product: info.product,
                }),
                // PCI / 蓝牙 / 未知类型端口不可能是 EDL 端口
                _ => None,
            })
            .collect::<Vec<_>>();

        for c in &candidates {
            log::debug!(
                "USB 串口: {} ({:04X}:{:04X}) {}",
                c.port_name,
                c.vid,
                c.pid,
                c.product.as_deref().unwrap_or("")
            );
        }

        Ok(candidates)
    }
}

#[async_trait]
impl DeviceQuery for SerialPortQuery {
    async fn query_port(&self) -> Result<PortDescriptor, String> {
        let candidates = tokio::task::spawn_blocking(Self::enumerate_usb_ports)
            .await
            .map_err(|e| format!("端口枚举任务失败: {}", e))??;
        Ok(select_port(&candidates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usb(port_name: &str, vid: u16, pid: u16, product: Option<&str>) -> UsbCandidate {
        UsbCandidate {
            port_name: port_name.to_string(),
            vid,
            pid,
            product: product.map(str::to_string),
        }
    }

    #[test]
    fn test_no_usb_port_is_not_found() {
        let port = select_port(&[]);
        assert!(port.is_not_found());
        assert_eq!(port.name, "N/A");
    }

    #[test]
    fn test_edl_port_preferred_over_later_usb_port() {
        let candidates = vec![
            usb("COM7", QUALCOMM_VID, EDL_PID, Some("Qualcomm HS-USB QDLoader 9008")),
            usb("COM3", 0x1A86, 0x7523, Some("USB-SERIAL CH340")),
        ];
        assert_eq!(
            select_port(&candidates),
            PortDescriptor::new("COM7", "Qualcomm HS-USB QDLoader 9008")
        );
    }

    #[test]
    fn test_last_usb_port_without_edl_match() {
        let candidates = vec![
            usb("/dev/ttyUSB0", 0x1A86, 0x7523, Some("USB-SERIAL CH340")),
            usb("/dev/ttyACM0", 0x2341, 0x0043, None),
        ];
        // 产品描述缺失时为空字符串
        assert_eq!(select_port(&candidates), PortDescriptor::new("/dev/ttyACM0", ""));
    }
}
