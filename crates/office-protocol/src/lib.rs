//! # Office Protocol
//!
//! 办公设备模拟器的纯数据定义（无状态、无副作用）
//!
//! ## 模块
//!
//! - `document`: 文档值类型与格式
//! - `state`: 设备就绪状态
//! - `capability`: 能力与设备类型（能力集合）
//!
//! 上层 crate（driver / client）只通过这里的类型交换数据。

pub mod capability;
pub mod document;
pub mod state;

// 重新导出常用类型
pub use capability::{Capability, DeviceKind};
pub use document::{Document, FormatType};
pub use state::DeviceState;

use thiserror::Error;

/// 协议层解析错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Unknown device state: {0:?}")]
    UnknownState(String),

    #[error("Unknown capability: {0:?}")]
    UnknownCapability(String),

    #[error("Unknown device kind: {0:?}")]
    UnknownDeviceKind(String),

    #[error("Unknown lifecycle command: {0:?}")]
    UnknownCommand(String),
}
