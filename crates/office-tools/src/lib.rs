//! # Office Tools - 共享数据结构
//!
//! **依赖原则**: 只依赖 `office-protocol`，避免依赖 `office-client`
//!
//! ## 包含模块
//!
//! - `config` - 设备配置（TOML）
//! - `script` - 命令脚本（JSON，纯数据结构）
//!
//! 执行脚本需要真实设备，由 CLI 完成；本 crate 只负责格式定义与读写。

pub mod config;
pub mod script;

// 重新导出常用类型
pub use config::{ConfigError, DeviceConfig};
pub use script::{Script, ScriptCommand, ScriptError};
