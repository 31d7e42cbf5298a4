//! Prelude - 常用类型的便捷导入
//!
//! 大多数用户应该使用这个模块来导入常用类型：
//!
//! ```rust
//! use office_sdk::prelude::*;
//! ```

// 客户端层（推荐使用）
pub use office_client::{
    DeviceBuilder, Fax, FaxView, OfficeDevice, Printer, PrinterView, Scanner, ScannerView,
};
// 生命周期
pub use office_client::{Device, Lifecycle, LifecycleCommand};

// 协议层数据类型
pub use office_protocol::{Capability, DeviceKind, DeviceState, Document, FormatType};

// 驱动层（单独模块与事件接收器）
pub use office_driver::{
    ChannelSink, ConsoleSink, EventSink, FaxModule, MemorySink, PrinterModule, ScannerModule,
    UsageSnapshot,
};

// 配置
pub use office_tools::DeviceConfig;

// 错误类型
pub use office_driver::DriverError;
pub use office_protocol::ProtocolError;
pub use office_tools::ConfigError;
