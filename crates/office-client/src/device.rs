//! 组合设备
//!
//! [`OfficeDevice`] 持有注入的能力模块（每种能力至多一个），
//! 对外呈现单一的生命周期与推导状态：
//!
//! | 模块状态 | 设备状态 |
//! |----------|----------|
//! | 全部 `Off` | `Off` |
//! | 全部 `Standby` | `Standby` |
//! | 其他任意组合 | `On` |
//!
//! 设备本身不缓存状态，也不做额外的前置检查：作业闸门、兄弟干扰、
//! 批处理待机全部由模块完成，设备只负责把其他模块的核心作为兄弟传入。

use crate::capability::{FaxView, PrinterView, ScannerView};
use office_driver::{
    CapabilityModule, Device, DriverError, FaxModule, ModuleCore, PrinterModule, ScannerModule,
    UsageSnapshot,
};
use office_protocol::{Capability, DeviceKind, DeviceState, Document, FormatType};
use tracing::{debug, info};

/// 组合办公设备
#[derive(Debug, Clone)]
pub struct OfficeDevice {
    kind: DeviceKind,
    printer: Option<PrinterModule>,
    scanner: Option<ScannerModule>,
    fax: Option<FaxModule>,
    power_on_count: u64,
}

impl OfficeDevice {
    /// 单功能打印机
    pub fn printer(printer: PrinterModule) -> Self {
        Self::assemble(DeviceKind::Printer, Some(printer), None, None)
    }

    /// 单功能扫描仪
    pub fn scanner(scanner: ScannerModule) -> Self {
        Self::assemble(DeviceKind::Scanner, None, Some(scanner), None)
    }

    /// 复印机（打印 + 扫描）
    pub fn copier(printer: PrinterModule, scanner: ScannerModule) -> Self {
        Self::assemble(DeviceKind::Copier, Some(printer), Some(scanner), None)
    }

    /// 多功能一体机（打印 + 扫描 + 传真）
    pub fn multifunction(printer: PrinterModule, scanner: ScannerModule, fax: FaxModule) -> Self {
        Self::assemble(
            DeviceKind::Multifunction,
            Some(printer),
            Some(scanner),
            Some(fax),
        )
    }

    /// 按设备类型组装任意模块组合
    ///
    /// # 错误
    ///
    /// - [`DriverError::MissingModule`]: 类型声明的能力没有对应模块
    /// - [`DriverError::UnsupportedModule`]: 提供了类型未声明的能力模块
    pub fn from_modules(
        kind: DeviceKind,
        printer: Option<PrinterModule>,
        scanner: Option<ScannerModule>,
        fax: Option<FaxModule>,
    ) -> Result<Self, DriverError> {
        let provided = [
            (Capability::Print, printer.is_some()),
            (Capability::Scan, scanner.is_some()),
            (Capability::Fax, fax.is_some()),
        ];
        for (capability, present) in provided {
            match (kind.supports(capability), present) {
                (true, false) => return Err(DriverError::MissingModule(capability)),
                (false, true) => return Err(DriverError::UnsupportedModule { kind, capability }),
                _ => {},
            }
        }
        Ok(Self::assemble(kind, printer, scanner, fax))
    }

    fn assemble(
        kind: DeviceKind,
        printer: Option<PrinterModule>,
        scanner: Option<ScannerModule>,
        fax: Option<FaxModule>,
    ) -> Self {
        debug!(%kind, "office device assembled");
        Self {
            kind,
            printer,
            scanner,
            fax,
            power_on_count: 0,
        }
    }

    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    pub fn supports(&self, capability: Capability) -> bool {
        self.kind.supports(capability)
    }

    /// 推导出的设备状态（每次读取都重新计算）
    pub fn state(&self) -> DeviceState {
        DeviceState::aggregate(self.cores().map(ModuleCore::state))
    }

    /// 把目标状态扇出到所有模块
    ///
    /// 每次以 `On` 调用都会使开机计数加一，即使设备已经是 `On`。
    /// 批次计数不受影响。
    pub fn set_state(&mut self, state: DeviceState) {
        for core in self.cores_mut() {
            core.set_state(state);
        }
        if state == DeviceState::On {
            self.power_on_count += 1;
            info!(kind = %self.kind, power_on_count = self.power_on_count, "device powered on");
        } else {
            debug!(kind = %self.kind, %state, "device state set");
        }
    }

    /// 打印（委托给打印模块）
    pub fn print(&mut self, document: &Document) {
        let Some(printer) = self.printer.as_mut() else {
            debug!(kind = %self.kind, "print ignored: no printer module");
            return;
        };
        let mut siblings = sibling_cores([
            self.scanner.as_mut().map(|m| m.core_mut()),
            self.fax.as_mut().map(|m| m.core_mut()),
        ]);
        printer.print_with_siblings(document, &mut siblings);
    }

    /// 扫描（委托给扫描模块）
    pub fn scan(&mut self, format: FormatType) -> Option<Document> {
        let Some(scanner) = self.scanner.as_mut() else {
            debug!(kind = %self.kind, "scan ignored: no scanner module");
            return None;
        };
        let mut siblings = sibling_cores([
            self.printer.as_mut().map(|m| m.core_mut()),
            self.fax.as_mut().map(|m| m.core_mut()),
        ]);
        scanner.scan_with_siblings(format, &mut siblings)
    }

    /// 发送传真（委托给传真模块）
    pub fn send_fax(&mut self, document: &Document) {
        let Some(fax) = self.fax.as_mut() else {
            debug!(kind = %self.kind, "fax send ignored: no fax module");
            return;
        };
        let mut siblings = sibling_cores([
            self.printer.as_mut().map(|m| m.core_mut()),
            self.scanner.as_mut().map(|m| m.core_mut()),
        ]);
        fax.send_with_siblings(document, &mut siblings);
    }

    /// 接收传真（委托给传真模块）
    pub fn receive_fax(&mut self) -> Option<Document> {
        let Some(fax) = self.fax.as_mut() else {
            debug!(kind = %self.kind, "fax receive ignored: no fax module");
            return None;
        };
        let mut siblings = sibling_cores([
            self.printer.as_mut().map(|m| m.core_mut()),
            self.scanner.as_mut().map(|m| m.core_mut()),
        ]);
        fax.receive_with_siblings(&mut siblings)
    }

    /// 复印：以默认格式扫描，扫描成功才打印
    ///
    /// 扫描与打印属于同一个复印作业，作业进行中两者之间不互相干扰；
    /// 其他兄弟模块（传真）照常被推入待机。作业完成后，仍处于 `On`
    /// 的扫描与打印模块都进入 `Standby`，与先扫描再打印的结束状态一致。
    /// 返回扫描得到的文档，扫描被拒绝时返回 `None`，不打印也不改变任何状态。
    pub fn scan_and_print(&mut self) -> Option<Document> {
        let scanner = self.scanner.as_mut()?;
        let mut siblings = sibling_cores([self.fax.as_mut().map(|m| m.core_mut())]);
        let document = scanner.scan_with_siblings(FormatType::default(), &mut siblings)?;

        if let Some(printer) = self.printer.as_mut() {
            let mut siblings = sibling_cores([self.fax.as_mut().map(|m| m.core_mut())]);
            printer.print_with_siblings(&document, &mut siblings);
        }

        for core in sibling_cores([
            self.printer.as_mut().map(|m| m.core_mut()),
            self.scanner.as_mut().map(|m| m.core_mut()),
        ]) {
            core.yield_to_sibling();
        }
        debug!(kind = %self.kind, document = %document, "copy job complete");
        Some(document)
    }

    pub fn print_count(&self) -> u64 {
        self.printer.as_ref().map_or(0, PrinterModule::print_count)
    }

    pub fn scan_count(&self) -> u64 {
        self.scanner.as_ref().map_or(0, ScannerModule::scan_count)
    }

    pub fn fax_sent_count(&self) -> u64 {
        self.fax.as_ref().map_or(0, FaxModule::sent_count)
    }

    pub fn fax_received_count(&self) -> u64 {
        self.fax.as_ref().map_or(0, FaxModule::received_count)
    }

    pub fn power_on_count(&self) -> u64 {
        self.power_on_count
    }

    /// 只读访问打印模块
    pub fn printer_module(&self) -> Option<&PrinterModule> {
        self.printer.as_ref()
    }

    pub fn scanner_module(&self) -> Option<&ScannerModule> {
        self.scanner.as_ref()
    }

    pub fn fax_module(&self) -> Option<&FaxModule> {
        self.fax.as_ref()
    }

    /// 某项能力对应模块的当前状态
    pub fn module_state(&self, capability: Capability) -> Option<DeviceState> {
        self.cores()
            .find(|core| core.capability() == capability)
            .map(ModuleCore::state)
    }

    /// 把设备当作打印机使用（仅当设备具备打印能力）
    pub fn as_printer(&mut self) -> Option<PrinterView<'_>> {
        self.printer.is_some().then(|| PrinterView::new(self))
    }

    pub fn as_scanner(&mut self) -> Option<ScannerView<'_>> {
        self.scanner.is_some().then(|| ScannerView::new(self))
    }

    pub fn as_fax(&mut self) -> Option<FaxView<'_>> {
        self.fax.is_some().then(|| FaxView::new(self))
    }

    /// 当前计数与模块状态快照
    pub fn snapshot(&self) -> UsageSnapshot {
        UsageSnapshot {
            kind: self.kind,
            state: self.state(),
            power_on_count: self.power_on_count,
            print_count: self.print_count(),
            scan_count: self.scan_count(),
            fax_sent_count: self.fax_sent_count(),
            fax_received_count: self.fax_received_count(),
            modules: self.cores().map(ModuleCore::snapshot).collect(),
        }
    }

    fn cores(&self) -> impl Iterator<Item = &ModuleCore> {
        let printer = self.printer.as_ref().map(|m| m.core());
        let scanner = self.scanner.as_ref().map(|m| m.core());
        let fax = self.fax.as_ref().map(|m| m.core());
        printer.into_iter().chain(scanner).chain(fax)
    }

    fn cores_mut(&mut self) -> impl Iterator<Item = &mut ModuleCore> {
        let printer = self.printer.as_mut().map(|m| m.core_mut());
        let scanner = self.scanner.as_mut().map(|m| m.core_mut());
        let fax = self.fax.as_mut().map(|m| m.core_mut());
        printer.into_iter().chain(scanner).chain(fax)
    }
}

impl Device for OfficeDevice {
    fn state(&self) -> DeviceState {
        OfficeDevice::state(self)
    }

    fn set_state(&mut self, state: DeviceState) {
        OfficeDevice::set_state(self, state);
    }
}

fn sibling_cores<'a, const N: usize>(
    parts: [Option<&'a mut ModuleCore>; N],
) -> Vec<&'a mut ModuleCore> {
    parts.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use office_driver::{BatchPolicy, HookManager, Lifecycle, MemorySink};
    use std::sync::Arc;

    fn copier() -> (OfficeDevice, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let device = OfficeDevice::copier(
            PrinterModule::with_sink(sink.clone()),
            ScannerModule::with_sink(sink.clone()),
        );
        (device, sink)
    }

    fn multifunction() -> (OfficeDevice, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let device = OfficeDevice::multifunction(
            PrinterModule::with_sink(sink.clone()),
            ScannerModule::with_sink(sink.clone()),
            FaxModule::with_sink(sink.clone()),
        );
        (device, sink)
    }

    #[test]
    fn test_fresh_device_is_off() {
        let (device, _) = copier();
        assert_eq!(device.state(), DeviceState::Off);
        assert_eq!(device.power_on_count(), 0);
        assert_eq!(device.print_count(), 0);
        assert_eq!(device.scan_count(), 0);
    }

    #[test]
    fn test_set_state_fans_out_and_counts_power_on() {
        let (mut device, _) = copier();
        device.set_state(DeviceState::On);
        assert_eq!(device.module_state(Capability::Print), Some(DeviceState::On));
        assert_eq!(device.module_state(Capability::Scan), Some(DeviceState::On));
        assert_eq!(device.power_on_count(), 1);

        device.power_on();
        assert_eq!(device.power_on_count(), 2);

        device.standby_on();
        assert_eq!(device.state(), DeviceState::Standby);
        device.power_off();
        assert_eq!(device.state(), DeviceState::Off);
        assert_eq!(device.power_on_count(), 2);
    }

    #[test]
    fn test_derived_state_mixed_modules_is_on() {
        let mut printer = PrinterModule::new();
        let mut scanner = ScannerModule::new();
        printer.set_state(DeviceState::Standby);
        scanner.set_state(DeviceState::On);
        let device = OfficeDevice::copier(printer, scanner);
        assert_eq!(device.state(), DeviceState::On);

        let mut printer = PrinterModule::new();
        printer.set_state(DeviceState::Standby);
        let device = OfficeDevice::copier(printer, ScannerModule::new());
        assert_eq!(device.state(), DeviceState::On);
    }

    #[test]
    fn test_three_prints_put_copier_into_standby() {
        let (mut device, sink) = copier();
        device.set_state(DeviceState::On);

        for name in ["a.pdf", "b.pdf", "c.pdf"] {
            device.print(&Document::pdf(name));
        }

        assert_eq!(device.print_count(), 3);
        assert_eq!(device.module_state(Capability::Print), Some(DeviceState::Standby));
        assert_eq!(device.module_state(Capability::Scan), Some(DeviceState::Standby));
        assert_eq!(device.state(), DeviceState::Standby);

        assert!(device.scan(FormatType::Pdf).is_none());
        assert_eq!(device.scan_count(), 0);
        assert_eq!(sink.len(), 3);
    }

    #[test]
    fn test_scan_pushes_printer_to_standby() {
        let (mut device, _) = copier();
        device.power_on();

        let scanned = device.scan(FormatType::Text).unwrap();
        assert_eq!(scanned.name(), "Scan1.txt");
        assert_eq!(device.module_state(Capability::Print), Some(DeviceState::Standby));

        device.print(&scanned);
        assert_eq!(device.print_count(), 0);
    }

    #[test]
    fn test_scan_and_print_copies_one_document() {
        let (mut device, sink) = copier();
        device.power_on();

        let copied = device.scan_and_print().unwrap();
        assert_eq!(copied.name(), "Scan1.jpg");
        assert_eq!(device.scan_count(), 1);
        assert_eq!(device.print_count(), 1);
        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Scan: Scan1.jpg"));
        assert!(lines[1].ends_with("Print: Scan1.jpg"));
    }

    #[test]
    fn test_copy_leaves_printer_and_scanner_in_standby() {
        let (mut device, _) = copier();
        device.power_on();

        assert!(device.scan_and_print().is_some());
        assert_eq!(device.module_state(Capability::Print), Some(DeviceState::Standby));
        assert_eq!(device.module_state(Capability::Scan), Some(DeviceState::Standby));
        assert_eq!(device.state(), DeviceState::Standby);

        // 与先扫描再打印的结束状态一致
        let (mut manual, _) = copier();
        manual.power_on();
        let scanned = manual.scan(FormatType::Image).unwrap();
        manual.print(&scanned);
        assert_eq!(manual.module_state(Capability::Print), Some(DeviceState::Standby));
        assert_eq!(manual.module_state(Capability::Scan), Some(DeviceState::Standby));

        // 再次复印前需要重新开机
        assert!(device.scan_and_print().is_none());
        assert_eq!(device.print_count(), 1);
        device.power_on();
        assert_eq!(device.scan_and_print().map(|d| d.name().to_string()).as_deref(), Some("Scan2.jpg"));
        assert_eq!(device.print_count(), 2);
    }

    #[test]
    fn test_scan_and_print_with_scanner_off_prints_nothing() {
        let mut printer = PrinterModule::new();
        printer.set_state(DeviceState::On);
        let mut device = OfficeDevice::copier(printer, ScannerModule::new());

        assert!(device.scan_and_print().is_none());
        assert_eq!(device.print_count(), 0);
        assert_eq!(device.module_state(Capability::Print), Some(DeviceState::On));
    }

    #[test]
    fn test_fax_interferes_with_printer_and_scanner() {
        let (mut device, sink) = multifunction();
        device.power_on();

        device.send_fax(&Document::pdf("contract.pdf"));
        assert_eq!(device.fax_sent_count(), 1);
        assert_eq!(device.module_state(Capability::Print), Some(DeviceState::Standby));
        assert_eq!(device.module_state(Capability::Scan), Some(DeviceState::Standby));
        assert_eq!(device.state(), DeviceState::On);

        let received = device.receive_fax().unwrap();
        assert_eq!(received.name(), "FaxReceived1.pdf");
        assert_eq!(device.fax_received_count(), 1);
        assert!(sink.contains("Fax sent: contract.pdf"));
        assert!(sink.contains("Fax received: FaxReceived1.pdf"));
    }

    #[test]
    fn test_scan_and_print_pushes_fax_to_standby() {
        let (mut device, _) = multifunction();
        device.power_on();

        assert!(device.scan_and_print().is_some());
        assert_eq!(device.print_count(), 1);
        assert_eq!(device.module_state(Capability::Fax), Some(DeviceState::Standby));
    }

    #[test]
    fn test_missing_capability_operations_are_noops() {
        let mut device = OfficeDevice::printer(PrinterModule::new());
        device.power_on();

        assert!(device.scan(FormatType::Pdf).is_none());
        assert!(device.receive_fax().is_none());
        device.send_fax(&Document::pdf("x.pdf"));
        assert!(device.scan_and_print().is_none());
        assert_eq!(device.scan_count(), 0);
        assert_eq!(device.fax_sent_count(), 0);
        assert!(device.as_scanner().is_none());
        assert!(device.as_fax().is_none());
        assert!(device.as_printer().is_some());
    }

    #[test]
    fn test_from_modules_validates_capability_set() {
        let err = OfficeDevice::from_modules(DeviceKind::Copier, Some(PrinterModule::new()), None, None)
            .unwrap_err();
        assert_eq!(err, DriverError::MissingModule(Capability::Scan));

        let err = OfficeDevice::from_modules(
            DeviceKind::Printer,
            Some(PrinterModule::new()),
            None,
            Some(FaxModule::new()),
        )
        .unwrap_err();
        assert_eq!(
            err,
            DriverError::UnsupportedModule {
                kind: DeviceKind::Printer,
                capability: Capability::Fax
            }
        );

        let device =
            OfficeDevice::from_modules(DeviceKind::Scanner, None, Some(ScannerModule::new()), None)
                .unwrap();
        assert_eq!(device.kind(), DeviceKind::Scanner);
    }

    #[test]
    fn test_snapshot_reads_through() {
        let policy = BatchPolicy::every(Capability::Print, 5).unwrap();
        let mut device = OfficeDevice::copier(
            PrinterModule::with_policy(policy, HookManager::new()),
            ScannerModule::new(),
        );
        device.power_on();
        device.print(&Document::pdf("a.pdf"));

        let snapshot = device.snapshot();
        assert_eq!(snapshot.kind, DeviceKind::Copier);
        assert_eq!(snapshot.state, DeviceState::On);
        assert_eq!(snapshot.print_count, 1);
        assert_eq!(snapshot.power_on_count, 1);
        let printer = snapshot.module(Capability::Print).unwrap();
        assert_eq!(printer.batch_count, 1);
        assert_eq!(printer.batch_threshold, Some(5));
        assert_eq!(
            snapshot.module(Capability::Scan).map(|m| m.state),
            Some(DeviceState::Standby)
        );
    }
}
