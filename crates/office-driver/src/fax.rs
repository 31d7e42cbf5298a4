//! 传真模块
//!
//! 发送与接收共用一个模块状态和批次计数，分别统计次数。
//! 默认不启用批处理待机。

use crate::event::Operation;
use crate::hooks::{EventSink, HookManager};
use crate::lifecycle::Device;
use crate::module::{BatchPolicy, CapabilityModule, ModuleCore};
use office_protocol::{Capability, DeviceState, Document, FormatType};
use std::sync::Arc;

/// 接收传真的文件名前缀：`FaxReceived<N>.pdf`
pub const FAX_RECEIVED_PREFIX: &str = "FaxReceived";

/// 传真模块
#[derive(Debug, Clone)]
pub struct FaxModule {
    core: ModuleCore,
    sent_count: u64,
    received_count: u64,
}

impl FaxModule {
    pub fn new() -> Self {
        Self::with_policy(BatchPolicy::unlimited(), HookManager::new())
    }

    pub fn with_policy(policy: BatchPolicy, hooks: HookManager) -> Self {
        Self {
            core: ModuleCore::new(Capability::Fax, policy, hooks),
            sent_count: 0,
            received_count: 0,
        }
    }

    pub fn with_sink(sink: Arc<dyn EventSink>) -> Self {
        Self::with_policy(BatchPolicy::unlimited(), HookManager::with_sink(sink))
    }

    pub fn state(&self) -> DeviceState {
        self.core.state()
    }

    pub fn set_state(&mut self, state: DeviceState) {
        self.core.set_state(state);
    }

    pub fn sent_count(&self) -> u64 {
        self.sent_count
    }

    pub fn received_count(&self) -> u64 {
        self.received_count
    }

    /// 发送传真（单独使用）
    pub fn send(&mut self, document: &Document) {
        self.send_with_siblings(document, &mut []);
    }

    pub fn send_with_siblings(&mut self, document: &Document, siblings: &mut [&mut ModuleCore]) {
        if !self.core.begin_job(siblings) {
            return;
        }
        self.sent_count += 1;
        self.core.finish_job(Operation::FaxSent, document.name());
    }

    /// 接收传真（单独使用）
    ///
    /// 模块未处于 `On` 时返回 `None`。
    pub fn receive(&mut self) -> Option<Document> {
        self.receive_with_siblings(&mut [])
    }

    pub fn receive_with_siblings(&mut self, siblings: &mut [&mut ModuleCore]) -> Option<Document> {
        if !self.core.begin_job(siblings) {
            return None;
        }
        self.received_count += 1;
        let document = Document::numbered(FAX_RECEIVED_PREFIX, self.received_count, FormatType::Pdf);
        self.core.finish_job(Operation::FaxReceived, document.name());
        Some(document)
    }
}

impl Default for FaxModule {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityModule for FaxModule {
    fn core(&self) -> &ModuleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ModuleCore {
        &mut self.core
    }
}

impl Device for FaxModule {
    fn state(&self) -> DeviceState {
        self.core.state()
    }

    fn set_state(&mut self, state: DeviceState) {
        self.core.set_state(state);
    }
}
