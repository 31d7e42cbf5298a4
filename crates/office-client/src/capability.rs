//! 能力 Trait 与能力视图
//!
//! 调用方可以把任何具备某项能力的东西当作"一台打印机 / 扫描仪 / 传真机"：
//!
//! - 单独的能力模块（[`PrinterModule`] 等）直接实现对应 Trait
//! - 组合设备通过 [`OfficeDevice::as_printer`] 等方法借出能力视图，
//!   只有设备类型声明了该能力时才返回 `Some`
//!
//! 视图的生命周期操作作用于整台设备（与组合设备自身的生命周期一致）。
//!
//! # 示例
//!
//! ```rust
//! use office_client::{Lifecycle, OfficeDevice, Printer};
//! use office_driver::{PrinterModule, ScannerModule};
//! use office_protocol::Document;
//!
//! fn print_twice<P: Printer + ?Sized>(printer: &mut P, document: &Document) {
//!     printer.print(document);
//!     printer.print(document);
//! }
//!
//! let mut copier = OfficeDevice::copier(PrinterModule::new(), ScannerModule::new());
//! copier.power_on();
//! if let Some(mut printer) = copier.as_printer() {
//!     print_twice(&mut printer, &Document::text("memo.txt"));
//! }
//! assert_eq!(copier.print_count(), 2);
//! ```

use crate::device::OfficeDevice;
use office_driver::{Device, FaxModule, PrinterModule, ScannerModule};
use office_protocol::{DeviceState, Document, FormatType};

/// 打印能力
pub trait Printer: Device {
    /// 打印文档；未就绪时静默忽略
    fn print(&mut self, document: &Document);

    fn print_count(&self) -> u64;
}

/// 扫描能力
pub trait Scanner: Device {
    /// 扫描；未就绪时返回 `None`
    fn scan(&mut self, format: FormatType) -> Option<Document>;

    fn scan_count(&self) -> u64;
}

/// 传真能力
pub trait Fax: Device {
    fn send(&mut self, document: &Document);

    fn receive(&mut self) -> Option<Document>;

    fn sent_count(&self) -> u64;

    fn received_count(&self) -> u64;
}

// ==================== 单独模块 ====================

impl Printer for PrinterModule {
    fn print(&mut self, document: &Document) {
        PrinterModule::print(self, document);
    }

    fn print_count(&self) -> u64 {
        PrinterModule::print_count(self)
    }
}

impl Scanner for ScannerModule {
    fn scan(&mut self, format: FormatType) -> Option<Document> {
        ScannerModule::scan(self, format)
    }

    fn scan_count(&self) -> u64 {
        ScannerModule::scan_count(self)
    }
}

impl Fax for FaxModule {
    fn send(&mut self, document: &Document) {
        FaxModule::send(self, document);
    }

    fn receive(&mut self) -> Option<Document> {
        FaxModule::receive(self)
    }

    fn sent_count(&self) -> u64 {
        FaxModule::sent_count(self)
    }

    fn received_count(&self) -> u64 {
        FaxModule::received_count(self)
    }
}

// ==================== 组合设备视图 ====================

macro_rules! device_view {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<'a> {
            device: &'a mut OfficeDevice,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(device: &'a mut OfficeDevice) -> Self {
                Self { device }
            }

            /// 视图背后的组合设备
            pub fn device(&self) -> &OfficeDevice {
                &*self.device
            }
        }

        impl Device for $name<'_> {
            fn state(&self) -> DeviceState {
                self.device.state()
            }

            fn set_state(&mut self, state: DeviceState) {
                self.device.set_state(state);
            }
        }
    };
}

device_view!(
    /// 组合设备的打印视图
    PrinterView
);
device_view!(
    /// 组合设备的扫描视图
    ScannerView
);
device_view!(
    /// 组合设备的传真视图
    FaxView
);

impl Printer for PrinterView<'_> {
    fn print(&mut self, document: &Document) {
        self.device.print(document);
    }

    fn print_count(&self) -> u64 {
        self.device.print_count()
    }
}

impl Scanner for ScannerView<'_> {
    fn scan(&mut self, format: FormatType) -> Option<Document> {
        self.device.scan(format)
    }

    fn scan_count(&self) -> u64 {
        self.device.scan_count()
    }
}

impl Fax for FaxView<'_> {
    fn send(&mut self, document: &Document) {
        self.device.send_fax(document);
    }

    fn receive(&mut self) -> Option<Document> {
        self.device.receive_fax()
    }

    fn sent_count(&self) -> u64 {
        self.device.fax_sent_count()
    }

    fn received_count(&self) -> u64 {
        self.device.fax_received_count()
    }
}
