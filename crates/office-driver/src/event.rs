//! 设备事件
//!
//! 每次成功作业产生一条事件，渲染为 `"<时间戳> <操作>: <文档名>"`。
//! 消费方只做子串匹配，时间戳格式本身不是契约的一部分。

use chrono::{DateTime, Local};
use office_protocol::Capability;
use std::fmt;

/// 事件时间戳的渲染格式（日.月.年 时:分:秒）
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// 作业类型（事件标签）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    Print,
    Scan,
    FaxSent,
    FaxReceived,
}

impl Operation {
    /// 事件行中的标签
    pub fn tag(self) -> &'static str {
        match self {
            Operation::Print => "Print",
            Operation::Scan => "Scan",
            Operation::FaxSent => "Fax sent",
            Operation::FaxReceived => "Fax received",
        }
    }

    /// 执行该作业的能力
    pub fn capability(self) -> Capability {
        match self {
            Operation::Print => Capability::Print,
            Operation::Scan => Capability::Scan,
            Operation::FaxSent | Operation::FaxReceived => Capability::Fax,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// 设备事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEvent {
    pub timestamp: DateTime<Local>,
    pub operation: Operation,
    pub document: String,
}

impl DeviceEvent {
    /// 以当前本地时间创建事件
    pub fn now(operation: Operation, document: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            operation,
            document: document.into(),
        }
    }
}

impl fmt::Display for DeviceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.operation.tag(),
            self.document
        )
    }
}
