//! 客户端接口模块
//!
//! 本模块提供办公设备的用户友好接口，包括：
//! - 组合设备 [`OfficeDevice`]：聚合多个能力模块，对外呈现单一生命周期
//! - 能力视图：把组合设备当作"一台打印机 / 扫描仪 / 传真机"使用
//! - [`DeviceBuilder`]：链式构造，或从 TOML 配置构造
//!
//! # 使用场景
//!
//! 这是大多数用户应该使用的模块。如果只需要单个能力模块，
//! 可以直接使用 [`office_driver`] 中的模块类型，它们同样实现了能力 Trait。
//!
//! # 示例
//!
//! ```rust
//! use office_client::{DeviceBuilder, Lifecycle};
//! use office_protocol::{DeviceKind, DeviceState, Document};
//!
//! let mut copier = DeviceBuilder::new(DeviceKind::Copier).build().unwrap();
//! copier.power_on();
//! copier.print(&Document::pdf("report.pdf"));
//!
//! assert_eq!(copier.print_count(), 1);
//! assert_eq!(copier.state(), DeviceState::On);
//! ```

pub mod builder;
pub mod capability;
pub mod device;

pub use builder::DeviceBuilder;
pub use capability::{Fax, FaxView, Printer, PrinterView, Scanner, ScannerView};
pub use device::OfficeDevice;

// 生命周期相关类型统一从客户端层导出
pub use office_driver::{Device, Lifecycle, LifecycleCommand, apply_lifecycle_command};
