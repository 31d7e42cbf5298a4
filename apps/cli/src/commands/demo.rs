//! demo 命令
//!
//! 内置演示场景：复印机、批处理待机、多功能一体机。
//! 批处理阈值与事件回显取自配置文件，设备类型由场景决定。
//! `--json` 时 stdout 只输出统计快照。

use anyhow::Result;
use clap::{Args, ValueEnum};
use office_sdk::prelude::*;
use std::path::Path;

use super::config::load_config;
use crate::output::Narrator;

/// 演示场景
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// 复印机：打印、扫描、复印，关机后作业被忽略
    Copier,
    /// 批处理：连续作业达到阈值后自动待机
    Batching,
    /// 多功能一体机：传真收发与打印扫描的相互干扰
    Multifunction,
}

impl Scenario {
    fn device_kind(self) -> DeviceKind {
        match self {
            Scenario::Copier | Scenario::Batching => DeviceKind::Copier,
            Scenario::Multifunction => DeviceKind::Multifunction,
        }
    }
}

/// 演示命令参数
#[derive(Args, Debug)]
pub struct DemoCommand {
    /// 场景名称
    #[arg(value_enum)]
    pub scenario: Scenario,

    /// 结束时以 JSON 输出统计快照
    #[arg(long)]
    pub json: bool,
}

impl DemoCommand {
    pub fn execute(&self, config_path: Option<&Path>) -> Result<()> {
        let base = load_config(config_path)?;
        // JSON 模式下事件行不写入 stdout
        let config = DeviceConfig {
            kind: self.scenario.device_kind(),
            echo_events: base.echo_events && !self.json,
            ..base
        };
        let mut device = DeviceBuilder::from_config(&config).build()?;
        tracing::debug!(scenario = ?self.scenario, kind = %config.kind, "running demo");

        let out = Narrator::for_json(self.json);
        match self.scenario {
            Scenario::Copier => copier_walkthrough(&mut device, out),
            Scenario::Batching => batching_walkthrough(&mut device, out),
            Scenario::Multifunction => multifunction_walkthrough(&mut device, out),
        }

        let snapshot = device.snapshot();
        if self.json {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        } else {
            out.blank();
            print!("{}", snapshot);
        }
        Ok(())
    }
}

fn announce(device: &OfficeDevice, out: Narrator, action: &str) {
    out.say(format_args!("🔌 {action} → {}", device.state()));
}

fn copier_walkthrough(device: &mut OfficeDevice, out: Narrator) {
    device.power_on();
    announce(device, out, "power on");

    device.print(&Document::pdf("aaa.pdf"));

    // 打印使扫描模块待机，重新开机后再扫描
    device.power_on();
    announce(device, out, "power on");
    if let Some(scanned) = device.scan(FormatType::Pdf) {
        out.say(format_args!("📄 scanned {scanned}"));
    }

    device.power_on();
    announce(device, out, "power on");
    if let Some(copied) = device.scan_and_print() {
        out.say(format_args!("📄 copied {copied}"));
    }

    device.power_off();
    announce(device, out, "power off");

    // 关机后作业被静默忽略
    device.print(&Document::pdf("aaa.pdf"));
    if device.scan(FormatType::Image).is_none() {
        out.say(format_args!("⏸  scan ignored while {}", device.state()));
    }
}

fn batching_walkthrough(device: &mut OfficeDevice, out: Narrator) {
    device.power_on();
    announce(device, out, "power on");

    for document in [
        Document::pdf("test1.pdf"),
        Document::text("test2.txt"),
        Document::image("test3.jpg"),
        Document::pdf("test4.pdf"),
    ] {
        let before = device.print_count();
        device.print(&document);
        if device.print_count() == before {
            out.say(format_args!("⏸  print {document} ignored while {}", device.state()));
        }
    }

    device.standby_off();
    announce(device, out, "standby off");

    for _ in 0..3 {
        if device.scan(FormatType::Image).is_none() {
            out.say(format_args!("⏸  scan ignored: scanner is {}", scanner_state(device)));
        }
    }

    device.standby_on();
    announce(device, out, "standby on");
    device.power_off();
    announce(device, out, "power off");
}

fn multifunction_walkthrough(device: &mut OfficeDevice, out: Narrator) {
    device.power_on();
    announce(device, out, "power on");

    device.send_fax(&Document::pdf("fax1.pdf"));

    device.power_on();
    announce(device, out, "power on");
    let scanned = device.scan(FormatType::Pdf);

    device.power_on();
    announce(device, out, "power on");
    if let Some(scanned) = scanned {
        device.print(&scanned);
    }

    device.power_on();
    announce(device, out, "power on");
    if let Some(received) = device.receive_fax() {
        out.say(format_args!("📠 received {received}"));
        // 接收传真已把打印模块推入待机
        let before = device.print_count();
        device.print(&received);
        if device.print_count() == before {
            out.say(format_args!("⏸  print {received} ignored: printer is {}", printer_state(device)));
        }
    }
}

fn scanner_state(device: &OfficeDevice) -> DeviceState {
    device
        .module_state(Capability::Scan)
        .unwrap_or(DeviceState::Off)
}

fn printer_state(device: &OfficeDevice) -> DeviceState {
    device
        .module_state(Capability::Print)
        .unwrap_or(DeviceState::Off)
}
