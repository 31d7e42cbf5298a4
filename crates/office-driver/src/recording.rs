//! 通道事件接收器（Channel Sink）
//!
//! 把设备事件投递到有界 Channel，由另一端（日志线程、UI、测试）消费。
//!
//! # 设计原则
//!
//! - **Bounded Queue**: 有界队列，防止消费端停滞时无限增长
//! - **非阻塞**: 使用 `try_send`，队列满或接收端已关闭时丢弃事件
//! - **丢弃监控**: 提供 `dropped_events` 计数器
//!
//! # 使用示例
//!
//! ```rust
//! use office_driver::recording::ChannelSink;
//! use office_driver::hooks::EventSink;
//! use office_driver::{DeviceEvent, Operation};
//!
//! let (sink, rx) = ChannelSink::new();
//! sink.on_event(&DeviceEvent::now(Operation::Print, "a.pdf"));
//!
//! let event = rx.try_recv().unwrap();
//! assert_eq!(event.document, "a.pdf");
//! assert_eq!(sink.dropped_count(), 0);
//! ```

use crate::event::DeviceEvent;
use crate::hooks::EventSink;
use crossbeam_channel::{Receiver, Sender, bounded};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// 默认队列容量
pub const DEFAULT_CAPACITY: usize = 1024;

/// 通道事件接收器
pub struct ChannelSink {
    /// 发送端
    tx: Sender<DeviceEvent>,

    /// 丢弃计数器（队列满或接收端关闭）
    dropped_events: Arc<AtomicU64>,

    /// 成功投递计数器
    delivered_events: Arc<AtomicU64>,
}

impl ChannelSink {
    /// 使用默认容量创建
    ///
    /// # 返回
    ///
    /// - `(sink, rx)`: 接收器实例和 Channel 接收端
    #[must_use]
    pub fn new() -> (Self, Receiver<DeviceEvent>) {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// 指定队列容量创建
    #[must_use]
    pub fn with_capacity(capacity: usize) -> (Self, Receiver<DeviceEvent>) {
        let (tx, rx) = bounded(capacity);

        let sink = Self {
            tx,
            dropped_events: Arc::new(AtomicU64::new(0)),
            delivered_events: Arc::new(AtomicU64::new(0)),
        };

        (sink, rx)
    }

    /// 丢弃计数器的 Arc 引用（在注册前克隆持有）
    #[must_use]
    pub fn dropped_events(&self) -> &Arc<AtomicU64> {
        &self.dropped_events
    }

    #[must_use]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_events.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn delivered_count(&self) -> u64 {
        self.delivered_events.load(Ordering::Relaxed)
    }
}

impl EventSink for ChannelSink {
    #[inline]
    fn on_event(&self, event: &DeviceEvent) {
        if self.tx.try_send(event.clone()).is_err() {
            // 队列满时丢弃新事件，保留旧事件
            self.dropped_events.fetch_add(1, Ordering::Relaxed);
        } else {
            self.delivered_events.fetch_add(1, Ordering::Relaxed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Operation;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_channel_sink_basic() {
        let (sink, rx) = ChannelSink::new();
        let sink = Arc::new(sink) as Arc<dyn EventSink>;

        sink.on_event(&DeviceEvent::now(Operation::Scan, "Scan1.jpg"));

        let received = rx.recv_timeout(Duration::from_millis(100)).unwrap();
        assert_eq!(received.operation, Operation::Scan);
        assert_eq!(received.document, "Scan1.jpg");
    }

    #[test]
    fn test_channel_sink_drops_when_full() {
        let (sink, _rx) = ChannelSink::with_capacity(2);

        for i in 0..5 {
            sink.on_event(&DeviceEvent::now(Operation::Print, format!("doc{i}.pdf")));
        }

        assert_eq!(sink.delivered_count(), 2);
        assert_eq!(sink.dropped_count(), 3);
    }

    #[test]
    fn test_channel_sink_drops_when_receiver_closed() {
        let (sink, rx) = ChannelSink::new();
        let dropped = sink.dropped_events().clone();

        sink.on_event(&DeviceEvent::now(Operation::Print, "a.pdf"));
        assert_eq!(dropped.load(Ordering::Relaxed), 0);

        drop(rx);
        for _ in 0..10 {
            sink.on_event(&DeviceEvent::now(Operation::Print, "a.pdf"));
        }
        assert_eq!(dropped.load(Ordering::Relaxed), 10);
    }

    #[test]
    fn test_channel_sink_concurrent() {
        let (sink, rx) = ChannelSink::new();
        let sink = Arc::new(sink);

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let sink = sink.clone();
                thread::spawn(move || {
                    sink.on_event(&DeviceEvent::now(Operation::FaxSent, format!("fax{i}.pdf")));
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let mut count = 0;
        while rx.try_recv().is_ok() {
            count += 1;
        }
        assert_eq!(count, 10);
    }
}
