//! 能力模块公共部分
//!
//! 每个能力模块（打印 / 扫描 / 传真）都内嵌一个 [`ModuleCore`]，
//! 由它统一负责：
//!
//! 1. **作业闸门**：只有 `On` 状态接受作业，`Standby` / `Off` 下作业被静默忽略
//! 2. **兄弟干扰**：作业开始前，把同一设备中其他处于 `On` 的模块推入 `Standby`
//! 3. **计数**：成功作业后使用计数、批次计数各加一
//! 4. **批处理待机**：批次计数达到阈值时，自身进入 `Standby` 并清零批次计数
//! 5. **事件**：成功作业向钩子管理器发送一条事件
//!
//! # 作业流程
//!
//! ```text
//! begin_job(siblings) ──闸门拒绝──▶ false（无事件、无计数变化）
//!        │
//!        ▼ 干扰兄弟模块
//!   产生文档（由具体模块完成）
//!        │
//!        ▼
//! finish_job(op, name) ──▶ 事件 → usage+1 → batch+1 → 阈值检查
//! ```

use crate::error::DriverError;
use crate::event::{DeviceEvent, Operation};
use crate::hooks::HookManager;
use crate::metrics::ModuleSnapshot;
use office_protocol::{Capability, DeviceState};
use std::num::NonZeroU32;
use tracing::debug;

/// 批处理策略
///
/// `threshold = None` 表示不启用批处理待机。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchPolicy {
    threshold: Option<NonZeroU32>,
}

impl BatchPolicy {
    /// 打印模块默认阈值
    pub const DEFAULT_PRINT_THRESHOLD: u32 = 3;
    /// 扫描模块默认阈值
    pub const DEFAULT_SCAN_THRESHOLD: u32 = 2;

    /// 每 `threshold` 次成功作业后进入待机
    ///
    /// # 错误
    ///
    /// `threshold == 0` 时返回 [`DriverError::ZeroBatchThreshold`]。
    pub fn every(capability: Capability, threshold: u32) -> Result<Self, DriverError> {
        NonZeroU32::new(threshold)
            .map(|threshold| Self {
                threshold: Some(threshold),
            })
            .ok_or(DriverError::ZeroBatchThreshold { capability })
    }

    /// 从可选阈值构造（`None` 表示不启用）
    pub fn from_option(capability: Capability, threshold: Option<u32>) -> Result<Self, DriverError> {
        match threshold {
            Some(threshold) => Self::every(capability, threshold),
            None => Ok(Self::unlimited()),
        }
    }

    /// 不启用批处理待机
    pub const fn unlimited() -> Self {
        Self { threshold: None }
    }

    /// 打印模块默认策略（每 3 次进入待机）
    pub const fn print_default() -> Self {
        Self::from_const(Self::DEFAULT_PRINT_THRESHOLD)
    }

    /// 扫描模块默认策略（每 2 次进入待机）
    pub const fn scan_default() -> Self {
        Self::from_const(Self::DEFAULT_SCAN_THRESHOLD)
    }

    const fn from_const(threshold: u32) -> Self {
        Self {
            threshold: NonZeroU32::new(threshold),
        }
    }

    pub fn threshold(&self) -> Option<u32> {
        self.threshold.map(NonZeroU32::get)
    }
}

/// 能力模块的公共状态与作业规则
#[derive(Debug, Clone)]
pub struct ModuleCore {
    capability: Capability,
    state: DeviceState,
    usage_count: u64,
    batch_count: u32,
    policy: BatchPolicy,
    hooks: HookManager,
}

impl ModuleCore {
    /// 创建新的模块核心（`Off`，计数为 0）
    pub fn new(capability: Capability, policy: BatchPolicy, hooks: HookManager) -> Self {
        Self {
            capability,
            state: DeviceState::Off,
            usage_count: 0,
            batch_count: 0,
            policy,
            hooks,
        }
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// 无条件覆盖状态
    ///
    /// 本层不做转换合法性检查；批次计数也不受影响。
    pub fn set_state(&mut self, state: DeviceState) {
        if self.state != state {
            debug!(capability = %self.capability, from = %self.state, to = %state, "module state changed");
        }
        self.state = state;
    }

    /// 成功作业总数（只增不减）
    pub fn usage_count(&self) -> u64 {
        self.usage_count
    }

    /// 当前批次内的作业数
    pub fn batch_count(&self) -> u32 {
        self.batch_count
    }

    pub fn accepts_jobs(&self) -> bool {
        self.state.accepts_jobs()
    }

    /// 被兄弟模块的作业干扰：`On` → `Standby`，其他状态不变
    pub fn yield_to_sibling(&mut self) {
        if self.state == DeviceState::On {
            debug!(capability = %self.capability, "sibling job started, entering standby");
            self.state = DeviceState::Standby;
        }
    }

    /// 作业开始
    ///
    /// 闸门拒绝时返回 `false`，不触碰兄弟模块；
    /// 否则把兄弟模块中处于 `On` 的推入 `Standby` 并返回 `true`。
    pub fn begin_job(&mut self, siblings: &mut [&mut ModuleCore]) -> bool {
        if !self.accepts_jobs() {
            debug!(capability = %self.capability, state = %self.state, "job ignored: module not accepting jobs");
            return false;
        }

        for sibling in siblings.iter_mut() {
            sibling.yield_to_sibling();
        }
        true
    }

    /// 作业完成：发送事件、更新计数、执行批处理策略
    pub fn finish_job(&mut self, operation: Operation, document: &str) {
        self.hooks.trigger_all(&DeviceEvent::now(operation, document));

        self.usage_count += 1;
        self.batch_count += 1;

        if let Some(threshold) = self.policy.threshold() {
            if self.batch_count == threshold {
                debug!(capability = %self.capability, threshold, "batch complete, entering standby");
                self.state = DeviceState::Standby;
                self.batch_count = 0;
            }
        }
    }

    /// 当前状态快照
    pub fn snapshot(&self) -> ModuleSnapshot {
        ModuleSnapshot {
            capability: self.capability,
            state: self.state,
            usage_count: self.usage_count,
            batch_count: self.batch_count,
            batch_threshold: self.policy.threshold(),
        }
    }
}

/// 能力模块 Trait
///
/// 组合设备通过它以统一方式访问各模块的公共核心
/// （状态扇出、兄弟干扰、计数读取）。
pub trait CapabilityModule {
    fn core(&self) -> &ModuleCore;

    fn core_mut(&mut self) -> &mut ModuleCore;

    fn capability(&self) -> Capability {
        self.core().capability()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;
    use std::sync::Arc;

    fn core_with_threshold(threshold: u32) -> (ModuleCore, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let policy = BatchPolicy::every(Capability::Print, threshold).unwrap();
        let core = ModuleCore::new(Capability::Print, policy, HookManager::with_sink(sink.clone()));
        (core, sink)
    }

    #[test]
    fn test_batch_policy_rejects_zero() {
        assert_eq!(
            BatchPolicy::every(Capability::Scan, 0),
            Err(DriverError::ZeroBatchThreshold {
                capability: Capability::Scan
            })
        );
        assert_eq!(BatchPolicy::every(Capability::Scan, 2).unwrap().threshold(), Some(2));
        assert_eq!(BatchPolicy::unlimited().threshold(), None);
        assert_eq!(
            BatchPolicy::from_option(Capability::Fax, None).unwrap(),
            BatchPolicy::unlimited()
        );
    }

    #[test]
    fn test_new_core_is_off_and_zeroed() {
        let (core, _sink) = core_with_threshold(3);
        assert_eq!(core.state(), DeviceState::Off);
        assert_eq!(core.usage_count(), 0);
        assert_eq!(core.batch_count(), 0);
    }

    #[test]
    fn test_begin_job_blocked_when_off_or_standby() {
        let (mut core, sink) = core_with_threshold(3);
        assert!(!core.begin_job(&mut []));

        core.set_state(DeviceState::Standby);
        assert!(!core.begin_job(&mut []));

        assert!(sink.is_empty());
        assert_eq!(core.usage_count(), 0);
    }

    #[test]
    fn test_blocked_job_leaves_siblings_untouched() {
        let (mut core, _sink) = core_with_threshold(3);
        let (mut sibling, _) = core_with_threshold(3);
        sibling.set_state(DeviceState::On);

        core.set_state(DeviceState::Standby);
        assert!(!core.begin_job(&mut [&mut sibling]));
        assert_eq!(sibling.state(), DeviceState::On);
    }

    #[test]
    fn test_begin_job_pushes_on_siblings_to_standby() {
        let (mut core, _) = core_with_threshold(3);
        let (mut on_sibling, _) = core_with_threshold(3);
        let (mut off_sibling, _) = core_with_threshold(3);
        core.set_state(DeviceState::On);
        on_sibling.set_state(DeviceState::On);

        assert!(core.begin_job(&mut [&mut on_sibling, &mut off_sibling]));
        assert_eq!(on_sibling.state(), DeviceState::Standby);
        assert_eq!(off_sibling.state(), DeviceState::Off);
        assert_eq!(core.state(), DeviceState::On);
    }

    #[test]
    fn test_finish_job_batches_into_standby() {
        let (mut core, sink) = core_with_threshold(3);
        core.set_state(DeviceState::On);

        for i in 1..=3u32 {
            assert!(core.begin_job(&mut []));
            core.finish_job(Operation::Print, &format!("doc{i}.pdf"));
        }

        assert_eq!(core.usage_count(), 3);
        assert_eq!(core.batch_count(), 0);
        assert_eq!(core.state(), DeviceState::Standby);
        assert_eq!(sink.len(), 3);
        assert!(sink.contains("Print: doc3.pdf"));

        // 第 4 次作业被忽略
        assert!(!core.begin_job(&mut []));
    }

    #[test]
    fn test_set_state_does_not_reset_batch() {
        let (mut core, _) = core_with_threshold(3);
        core.set_state(DeviceState::On);
        core.begin_job(&mut []);
        core.finish_job(Operation::Print, "a.pdf");

        core.set_state(DeviceState::Off);
        core.set_state(DeviceState::On);
        assert_eq!(core.batch_count(), 1);
    }

    #[test]
    fn test_unlimited_policy_never_standby() {
        let mut core = ModuleCore::new(Capability::Fax, BatchPolicy::unlimited(), HookManager::new());
        core.set_state(DeviceState::On);
        for _ in 0..100 {
            assert!(core.begin_job(&mut []));
            core.finish_job(Operation::FaxSent, "fax.pdf");
        }
        assert_eq!(core.state(), DeviceState::On);
        assert_eq!(core.usage_count(), 100);
    }
}
