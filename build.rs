//! # EDL Flasher - Cargo 构建脚本
//!
//! 启用 `desktop` 特性时，由 Tauri 完成构建准备工作：
//! - 根据 `tauri.conf.json` 生成运行时所需的资源绑定代码
//! - 处理应用图标、权限清单等静态资源
//! - 在 Windows 平台上生成应用程序清单（manifest）和资源文件（.rc）
//!
//! 未启用 `desktop` 时（仅编译核心库和单元测试），本脚本不做任何事。

/// 构建脚本入口函数
fn main() {
    #[cfg(feature = "desktop")]
    tauri_build::build()
}
