//! 打印模块

use crate::event::Operation;
use crate::hooks::{EventSink, HookManager};
use crate::lifecycle::Device;
use crate::module::{BatchPolicy, CapabilityModule, ModuleCore};
use office_protocol::{Capability, DeviceState, Document};
use std::sync::Arc;

/// 打印模块
///
/// 默认每 3 次成功打印进入一次待机。
///
/// # 示例
///
/// ```rust
/// use office_driver::{Lifecycle, PrinterModule};
/// use office_protocol::{DeviceState, Document};
///
/// let mut printer = PrinterModule::new();
/// printer.print(&Document::pdf("ignored.pdf")); // Off：静默忽略
/// assert_eq!(printer.print_count(), 0);
///
/// printer.power_on();
/// for name in ["a.pdf", "b.pdf", "c.pdf"] {
///     printer.print(&Document::pdf(name));
/// }
/// assert_eq!(printer.print_count(), 3);
/// assert_eq!(printer.state(), DeviceState::Standby);
/// ```
#[derive(Debug, Clone)]
pub struct PrinterModule {
    core: ModuleCore,
}

impl PrinterModule {
    /// 默认批处理策略，无事件接收器
    pub fn new() -> Self {
        Self::with_policy(BatchPolicy::print_default(), HookManager::new())
    }

    pub fn with_policy(policy: BatchPolicy, hooks: HookManager) -> Self {
        Self {
            core: ModuleCore::new(Capability::Print, policy, hooks),
        }
    }

    /// 默认批处理策略，事件发往 `sink`
    pub fn with_sink(sink: Arc<dyn EventSink>) -> Self {
        Self::with_policy(BatchPolicy::print_default(), HookManager::with_sink(sink))
    }

    pub fn state(&self) -> DeviceState {
        self.core.state()
    }

    pub fn set_state(&mut self, state: DeviceState) {
        self.core.set_state(state);
    }

    /// 成功打印次数
    pub fn print_count(&self) -> u64 {
        self.core.usage_count()
    }

    /// 打印文档（单独使用，无兄弟模块）
    pub fn print(&mut self, document: &Document) {
        self.print_with_siblings(document, &mut []);
    }

    /// 打印文档，并对同一设备中的兄弟模块施加干扰
    ///
    /// 模块未处于 `On` 时静默忽略：无事件、计数不变、兄弟模块不受影响。
    pub fn print_with_siblings(&mut self, document: &Document, siblings: &mut [&mut ModuleCore]) {
        if !self.core.begin_job(siblings) {
            return;
        }
        self.core.finish_job(Operation::Print, document.name());
    }
}

impl Default for PrinterModule {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityModule for PrinterModule {
    fn core(&self) -> &ModuleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ModuleCore {
        &mut self.core
    }
}

impl Device for PrinterModule {
    fn state(&self) -> DeviceState {
        self.core.state()
    }

    fn set_state(&mut self, state: DeviceState) {
        self.core.set_state(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Lifecycle;
    use crate::sinks::MemorySink;

    fn printer() -> (PrinterModule, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (PrinterModule::with_sink(sink.clone()), sink)
    }

    #[test]
    fn test_print_while_off_is_noop() {
        let (mut printer, sink) = printer();
        printer.print(&Document::pdf("a.pdf"));

        assert_eq!(printer.print_count(), 0);
        assert_eq!(printer.core().batch_count(), 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_print_emits_event() {
        let (mut printer, sink) = printer();
        printer.power_on();
        printer.print(&Document::pdf("file.pdf"));

        assert_eq!(printer.print_count(), 1);
        assert!(sink.contains("Print"));
        assert!(sink.contains("file.pdf"));
    }

    #[test]
    fn test_fourth_print_after_batch_is_noop() {
        let (mut printer, sink) = printer();
        printer.power_on();
        for i in 0..4 {
            printer.print(&Document::text(format!("doc{i}.txt")));
        }

        assert_eq!(printer.print_count(), 3);
        assert_eq!(printer.state(), DeviceState::Standby);
        assert_eq!(sink.len(), 3);
        assert!(!sink.contains("doc3.txt"));

        printer.standby_off();
        printer.print(&Document::text("doc3.txt"));
        assert_eq!(printer.print_count(), 4);
    }

    #[test]
    fn test_print_interferes_with_on_sibling_only() {
        let (mut printer, _) = printer();
        let mut scanner_core =
            ModuleCore::new(Capability::Scan, BatchPolicy::scan_default(), HookManager::new());
        printer.power_on();
        scanner_core.set_state(DeviceState::On);

        printer.print_with_siblings(&Document::pdf("a.pdf"), &mut [&mut scanner_core]);
        assert_eq!(scanner_core.state(), DeviceState::Standby);

        scanner_core.set_state(DeviceState::Off);
        printer.print_with_siblings(&Document::pdf("b.pdf"), &mut [&mut scanner_core]);
        assert_eq!(scanner_core.state(), DeviceState::Off);
    }
}
