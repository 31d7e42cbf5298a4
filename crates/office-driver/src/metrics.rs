//! 使用计数快照
//!
//! 快照是某一时刻计数与状态的不可变拷贝，用于报表与断言。
//! 设备本身从不缓存这些值：每次读取都直接穿透到模块。

use office_protocol::{Capability, DeviceKind, DeviceState};
use std::fmt;

/// 单个能力模块的快照
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleSnapshot {
    pub capability: Capability,
    pub state: DeviceState,
    /// 成功作业总数
    pub usage_count: u64,
    /// 当前批次内的作业数
    pub batch_count: u32,
    /// 批处理阈值（None 表示不启用）
    pub batch_threshold: Option<u32>,
}

/// 设备级使用快照
///
/// 设备缺少某项能力时，对应计数为 0，`modules` 中也不会出现该能力。
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsageSnapshot {
    pub kind: DeviceKind,
    /// 推导出的设备状态
    pub state: DeviceState,
    pub power_on_count: u64,
    pub print_count: u64,
    pub scan_count: u64,
    pub fax_sent_count: u64,
    pub fax_received_count: u64,
    pub modules: Vec<ModuleSnapshot>,
}

impl UsageSnapshot {
    /// 所有模块的成功作业总数
    pub fn total_jobs(&self) -> u64 {
        self.modules.iter().map(|m| m.usage_count).sum()
    }

    pub fn module(&self, capability: Capability) -> Option<&ModuleSnapshot> {
        self.modules.iter().find(|m| m.capability == capability)
    }
}

impl fmt::Display for UsageSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- STATISTICS ({}) ---", self.kind)?;
        writeln!(f, "State:          {}", self.state)?;
        writeln!(f, "Power On Count: {}", self.power_on_count)?;
        if self.kind.supports(Capability::Print) {
            writeln!(f, "Print Count:    {}", self.print_count)?;
        }
        if self.kind.supports(Capability::Scan) {
            writeln!(f, "Scan Count:     {}", self.scan_count)?;
        }
        if self.kind.supports(Capability::Fax) {
            writeln!(f, "Fax Sent:       {}", self.fax_sent_count)?;
            writeln!(f, "Fax Received:   {}", self.fax_received_count)?;
        }
        for module in &self.modules {
            writeln!(
                f,
                "  [{}] {} (batch {}/{})",
                module.capability,
                module.state,
                module.batch_count,
                module
                    .batch_threshold
                    .map_or_else(|| "-".to_string(), |t| t.to_string())
            )?;
        }
        Ok(())
    }
}
