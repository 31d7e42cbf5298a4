//! 钩子系统（Hook System）
//!
//! 本模块管理设备事件的接收器（Sink）。能力模块每完成一次作业，
//! 就通过 [`HookManager::trigger_all`] 把事件分发给所有已注册的接收器。
//!
//! # 使用示例
//!
//! ```rust
//! use office_driver::hooks::{EventSink, HookManager};
//! use office_driver::sinks::MemorySink;
//! use office_driver::{DeviceEvent, Operation};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let mut hooks = HookManager::new();
//! hooks.add_sink(sink.clone());
//!
//! hooks.trigger_all(&DeviceEvent::now(Operation::Print, "a.pdf"));
//! assert!(sink.contains("Print: a.pdf"));
//! ```

use crate::event::DeviceEvent;
use std::sync::Arc;
use tracing::trace;

/// 事件接收器 Trait
///
/// 接收器只会收到成功作业的事件；被忽略的作业（模块未就绪）不产生事件。
///
/// 同一设备的多个模块共享接收器，因此要求 `Send + Sync`。
pub trait EventSink: Send + Sync {
    /// 收到一条设备事件
    fn on_event(&self, event: &DeviceEvent);
}

/// 钩子管理器
///
/// 持有接收器列表。克隆开销很小（只克隆 `Arc`），
/// 构造组合设备时每个模块各持有一份克隆，指向同一组接收器。
#[derive(Clone, Default)]
pub struct HookManager {
    /// 接收器列表
    sinks: Vec<Arc<dyn EventSink>>,
}

impl HookManager {
    /// 创建新的钩子管理器（无接收器）
    #[must_use]
    pub const fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// 只包含一个接收器的管理器
    #[must_use]
    pub fn with_sink(sink: Arc<dyn EventSink>) -> Self {
        Self { sinks: vec![sink] }
    }

    /// 添加接收器
    pub fn add_sink(&mut self, sink: Arc<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// 移除所有接收器
    pub fn clear(&mut self) {
        self.sinks.clear();
    }

    /// 把事件分发给所有接收器
    pub fn trigger_all(&self, event: &DeviceEvent) {
        trace!(operation = %event.operation, document = %event.document, sinks = self.sinks.len(), "dispatching device event");
        for sink in self.sinks.iter() {
            sink.on_event(event);
        }
    }

    /// 获取接收器数量
    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// 检查是否为空
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl std::fmt::Debug for HookManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookManager").field("sinks", &self.sinks.len()).finish()
    }
}
