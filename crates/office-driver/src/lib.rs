//! 驱动层模块
//!
//! 本模块提供办公设备的能力模块实现，包括：
//! - 能力模块（打印 / 扫描 / 传真），各自持有就绪状态与使用计数
//! - 批处理策略：连续 N 次成功作业后自动进入待机
//! - 兄弟模块干扰：一个模块开始作业时，把其他处于 On 的模块推入待机
//! - 生命周期命令（PowerOn / PowerOff / StandbyOn / StandbyOff）
//! - 事件钩子：每次成功作业向事件接收器发送一行可读文本
//!
//! # 使用场景
//!
//! 能力模块可以单独使用（单功能打印机），也可以注入到
//! `office-client` 的组合设备中。大多数用户应该使用组合设备接口。

mod error;
pub mod event;
pub mod fax;
pub mod hooks;
pub mod lifecycle;
pub mod metrics;
pub mod module;
pub mod printer;
pub mod recording;
pub mod scanner;
pub mod sinks;

pub use error::DriverError;
pub use event::{DeviceEvent, Operation};
pub use fax::FaxModule;
pub use hooks::{EventSink, HookManager};
pub use lifecycle::{Device, Lifecycle, LifecycleCommand, apply_lifecycle_command};
pub use metrics::{ModuleSnapshot, UsageSnapshot};
pub use module::{BatchPolicy, CapabilityModule, ModuleCore};
pub use printer::PrinterModule;
pub use recording::ChannelSink;
pub use scanner::ScannerModule;
pub use sinks::{ConsoleSink, MemorySink};
