//! Builder 模式实现
//!
//! 提供链式构造 [`OfficeDevice`] 的便捷方式，也可以直接从
//! [`DeviceConfig`] 构造。Builder 负责按设备类型创建模块、
//! 为每个模块设置批处理策略，并让所有模块共享同一组事件接收器。

use crate::device::OfficeDevice;
use office_driver::{
    BatchPolicy, ConsoleSink, DriverError, EventSink, FaxModule, HookManager, PrinterModule,
    ScannerModule,
};
use office_protocol::{Capability, DeviceKind};
use office_tools::DeviceConfig;
use std::sync::Arc;
use tracing::debug;

/// OfficeDevice Builder（链式构造）
///
/// # Example
///
/// ```rust
/// use office_client::{DeviceBuilder, Lifecycle};
/// use office_driver::MemorySink;
/// use office_protocol::{DeviceKind, DeviceState, Document};
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let mut printer = DeviceBuilder::new(DeviceKind::Printer)
///     .print_batch(2)
///     .event_sink(sink.clone())
///     .build()
///     .unwrap();
///
/// printer.power_on();
/// printer.print(&Document::pdf("a.pdf"));
/// printer.print(&Document::pdf("b.pdf"));
/// assert_eq!(printer.state(), DeviceState::Standby);
/// assert_eq!(sink.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DeviceBuilder {
    /// 设备类型（决定创建哪些模块）
    kind: DeviceKind,
    /// 打印批处理阈值
    print_batch: u32,
    /// 扫描批处理阈值
    scan_batch: u32,
    /// 传真批处理阈值（None 表示不启用）
    fax_batch: Option<u32>,
    /// 所有模块共享的事件钩子
    hooks: HookManager,
}

impl DeviceBuilder {
    /// 创建新的 Builder（默认阈值：打印 3、扫描 2、传真不启用）
    pub fn new(kind: DeviceKind) -> Self {
        Self {
            kind,
            print_batch: BatchPolicy::DEFAULT_PRINT_THRESHOLD,
            scan_batch: BatchPolicy::DEFAULT_SCAN_THRESHOLD,
            fax_batch: None,
            hooks: HookManager::new(),
        }
    }

    /// 从配置创建 Builder
    ///
    /// `echo_events = true` 时自动挂载一个 [`ConsoleSink`]。
    pub fn from_config(config: &DeviceConfig) -> Self {
        let builder = Self::new(config.kind)
            .print_batch(config.print_batch_threshold)
            .scan_batch(config.scan_batch_threshold)
            .fax_batch(config.fax_batch_threshold);

        if config.echo_events {
            builder.event_sink(Arc::new(ConsoleSink))
        } else {
            builder
        }
    }

    /// 设置打印批处理阈值
    pub fn print_batch(mut self, threshold: u32) -> Self {
        self.print_batch = threshold;
        self
    }

    /// 设置扫描批处理阈值
    pub fn scan_batch(mut self, threshold: u32) -> Self {
        self.scan_batch = threshold;
        self
    }

    /// 设置传真批处理阈值
    pub fn fax_batch(mut self, threshold: Option<u32>) -> Self {
        self.fax_batch = threshold;
        self
    }

    /// 添加事件接收器（可多次调用，事件按添加顺序分发）
    pub fn event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.hooks.add_sink(sink);
        self
    }

    /// 构建组合设备
    ///
    /// 只校验设备类型实际使用的阈值：例如打印机不会因为
    /// `scan_batch(0)` 而构建失败。
    ///
    /// # 错误
    ///
    /// - [`DriverError::ZeroBatchThreshold`]: 所用模块的阈值为 0
    pub fn build(self) -> Result<OfficeDevice, DriverError> {
        let printer = if self.kind.supports(Capability::Print) {
            let policy = BatchPolicy::every(Capability::Print, self.print_batch)?;
            Some(PrinterModule::with_policy(policy, self.hooks.clone()))
        } else {
            None
        };

        let scanner = if self.kind.supports(Capability::Scan) {
            let policy = BatchPolicy::every(Capability::Scan, self.scan_batch)?;
            Some(ScannerModule::with_policy(policy, self.hooks.clone()))
        } else {
            None
        };

        let fax = if self.kind.supports(Capability::Fax) {
            let policy = BatchPolicy::from_option(Capability::Fax, self.fax_batch)?;
            Some(FaxModule::with_policy(policy, self.hooks.clone()))
        } else {
            None
        };

        debug!(kind = %self.kind, sinks = self.hooks.len(), "building office device");
        OfficeDevice::from_modules(self.kind, printer, scanner, fax)
    }
}

impl Default for DeviceBuilder {
    fn default() -> Self {
        Self::new(DeviceKind::default())
    }
}
