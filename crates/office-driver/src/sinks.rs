//! 内置事件接收器
//!
//! - [`ConsoleSink`]：把事件行打印到标准输出（演示程序默认使用）
//! - [`MemorySink`]：把事件行保存在内存中，测试通过它断言输出

use crate::event::DeviceEvent;
use crate::hooks::EventSink;
use parking_lot::Mutex;

/// 标准输出接收器
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn on_event(&self, event: &DeviceEvent) {
        println!("{}", event);
    }
}

/// 内存接收器
///
/// 保存渲染后的事件行，用于测试与脚本回显。
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已记录的全部事件行（按时间顺序）
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// 拼接后的完整输出（每行以换行结尾）
    pub fn output(&self) -> String {
        self.lines.lock().iter().map(|line| format!("{line}\n")).collect()
    }

    /// 是否有任意一行包含给定子串
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|line| line.contains(needle))
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// 取出并清空已记录的行
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl EventSink for MemorySink {
    fn on_event(&self, event: &DeviceEvent) {
        self.lines.lock().push(event.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Operation;

    #[test]
    fn test_memory_sink_records_lines() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.on_event(&DeviceEvent::now(Operation::Print, "a.pdf"));
        sink.on_event(&DeviceEvent::now(Operation::FaxSent, "a.pdf"));

        assert_eq!(sink.len(), 2);
        assert!(sink.contains("Print: a.pdf"));
        assert!(sink.contains("Fax sent: a.pdf"));
        assert!(!sink.contains("Scan"));
        assert_eq!(sink.output().lines().count(), 2);
    }

    #[test]
    fn test_memory_sink_take_clears() {
        let sink = MemorySink::new();
        sink.on_event(&DeviceEvent::now(Operation::Scan, "Scan1.jpg"));

        let lines = sink.take();
        assert_eq!(lines.len(), 1);
        assert!(sink.is_empty());
    }
}
