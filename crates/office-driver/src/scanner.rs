//! 扫描模块

use crate::event::Operation;
use crate::hooks::{EventSink, HookManager};
use crate::lifecycle::Device;
use crate::module::{BatchPolicy, CapabilityModule, ModuleCore};
use office_protocol::{Capability, DeviceState, Document, FormatType};
use std::sync::Arc;

/// 扫描文件名前缀：`Scan<N>.<ext>`
pub const SCAN_PREFIX: &str = "Scan";

/// 扫描模块
///
/// 默认每 2 次成功扫描进入一次待机。扫描产生的文档按
/// 扫描计数（自增后的值）命名，例如第一次 PDF 扫描得到 `Scan1.pdf`。
#[derive(Debug, Clone)]
pub struct ScannerModule {
    core: ModuleCore,
}

impl ScannerModule {
    pub fn new() -> Self {
        Self::with_policy(BatchPolicy::scan_default(), HookManager::new())
    }

    pub fn with_policy(policy: BatchPolicy, hooks: HookManager) -> Self {
        Self {
            core: ModuleCore::new(Capability::Scan, policy, hooks),
        }
    }

    pub fn with_sink(sink: Arc<dyn EventSink>) -> Self {
        Self::with_policy(BatchPolicy::scan_default(), HookManager::with_sink(sink))
    }

    pub fn state(&self) -> DeviceState {
        self.core.state()
    }

    pub fn set_state(&mut self, state: DeviceState) {
        self.core.set_state(state);
    }

    /// 成功扫描次数
    pub fn scan_count(&self) -> u64 {
        self.core.usage_count()
    }

    /// 扫描（单独使用，无兄弟模块）
    ///
    /// 模块未处于 `On` 时返回 `None`。
    pub fn scan(&mut self, format: FormatType) -> Option<Document> {
        self.scan_with_siblings(format, &mut [])
    }

    /// 扫描，并对同一设备中的兄弟模块施加干扰
    pub fn scan_with_siblings(
        &mut self,
        format: FormatType,
        siblings: &mut [&mut ModuleCore],
    ) -> Option<Document> {
        if !self.core.begin_job(siblings) {
            return None;
        }

        let document = Document::numbered(SCAN_PREFIX, self.core.usage_count() + 1, format);
        self.core.finish_job(Operation::Scan, document.name());
        Some(document)
    }
}

impl Default for ScannerModule {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityModule for ScannerModule {
    fn core(&self) -> &ModuleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ModuleCore {
        &mut self.core
    }
}

impl Device for ScannerModule {
    fn state(&self) -> DeviceState {
        self.core.state()
    }

    fn set_state(&mut self, state: DeviceState) {
        self.core.set_state(state);
    }
}
