//! Office SDK - 办公设备模拟器
//!
//! 模拟打印机、扫描仪、复印机与多功能一体机的电源状态、
//! 作业计数、批处理待机以及模块之间的相互干扰。
//!
//! # 架构设计
//!
//! 本 SDK 采用分层架构，从底层到高层：
//!
//! - **协议层** (`protocol`): 文档、格式、状态、能力等纯数据类型
//! - **驱动层** (`driver`): 能力模块、批处理策略、事件钩子
//! - **客户端层** (`client`): 组合设备、能力视图、Builder
//! - **工具层** (`tools`): TOML 配置与 JSON 脚本
//!
//! # 快速开始
//!
//! ```rust
//! use office_sdk::prelude::*;
//!
//! let mut copier = DeviceBuilder::new(DeviceKind::Copier).build()?;
//! copier.power_on();
//! copier.scan_and_print();
//! assert_eq!(copier.print_count(), 1);
//! # Ok::<(), DriverError>(())
//! ```

pub mod prelude;

/// 协议层（纯数据）
pub mod protocol {
    pub use office_protocol::*;
}

/// 驱动层（能力模块，高级用户使用）
pub mod driver {
    pub use office_driver::*;
}

/// 客户端层（推荐入口）
pub mod client {
    pub use office_client::*;
}

/// 工具层（配置与脚本）
pub mod tools {
    pub use office_tools::*;
}

// --- 用户以此为界 ---
// 以下是通过 Facade Pattern 提供的公共 API

pub use office_client::{DeviceBuilder, Lifecycle, OfficeDevice};
pub use office_driver::{DriverError, UsageSnapshot};
pub use office_protocol::ProtocolError;
pub use office_tools::{ConfigError, DeviceConfig};

use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;

/// 未设置 `RUST_LOG` 时使用的日志过滤指令
pub const DEFAULT_LOG_DIRECTIVE: &str = "office=info";

/// 初始化全局日志
///
/// 安装 `tracing-subscriber` 的 fmt 订阅者（输出到 stderr），过滤规则取自
/// `RUST_LOG`，未设置时使用 [`DEFAULT_LOG_DIRECTIVE`]。同时把 `log` 记录桥接到 `tracing`。
///
/// # 错误
///
/// 全局订阅者已存在时返回错误（例如重复调用）。
pub fn init_logging() -> Result<(), SetGlobalDefaultError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 其他组件可能已经设置了 log 记录器，此时不做桥接
    if tracing_log::LogTracer::init().is_err() {
        tracing::debug!("log records are not bridged: a logger is already installed");
    }
    Ok(())
}
