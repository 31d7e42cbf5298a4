//! 驱动层错误类型定义
//!
//! 注意：对未就绪模块发起作业不是错误（静默忽略），这里只包含构造期错误。

use office_protocol::{Capability, DeviceKind};
use thiserror::Error;

/// 驱动层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    /// 批处理阈值必须大于 0
    #[error("Batch threshold for {capability} must be greater than zero")]
    ZeroBatchThreshold { capability: Capability },

    /// 设备类型声明了某项能力，但没有提供对应模块
    #[error("Missing {0} module for declared capability")]
    MissingModule(Capability),

    /// 提供了设备类型未声明的能力模块
    #[error("{kind} does not declare the {capability} capability")]
    UnsupportedModule {
        kind: DeviceKind,
        capability: Capability,
    },
}
