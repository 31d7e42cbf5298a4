//! 脚本执行
//!
//! 把 JSON 脚本中的命令逐条作用到一台设备上。设备未就绪时作业会被
//! 静默忽略，执行器通过比较计数判断每条命令是否生效。

use office_sdk::prelude::*;
use office_sdk::tools::{Script, ScriptCommand};
use std::fmt;

use crate::output::Narrator;

/// 单条命令的执行结果
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// 生命周期命令或作业已生效
    Applied,
    /// 作业产生了文档（扫描、复印、接收传真）
    Produced(Document),
    /// 设备未就绪，作业被忽略
    Ignored,
    /// 状态查询
    Status(UsageSnapshot),
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutcome::Applied => write!(f, "✅ 完成"),
            CommandOutcome::Produced(document) => {
                write!(f, "✅ 生成文档 {} ({})", document, document.format())
            },
            CommandOutcome::Ignored => write!(f, "⏸  设备未就绪，已忽略"),
            CommandOutcome::Status(snapshot) => write!(f, "{}", snapshot),
        }
    }
}

/// 脚本执行结果
#[derive(Debug, Clone)]
pub struct ScriptResult {
    pub script_name: String,
    pub total_commands: usize,
    /// 生效的命令数（含状态查询）
    pub applied: usize,
    /// 被忽略的作业数
    pub ignored: usize,
}

/// 脚本执行器
pub struct ScriptExecutor {
    device: OfficeDevice,
    out: Narrator,
}

impl ScriptExecutor {
    /// 创建新的脚本执行器
    pub fn new(device: OfficeDevice, out: Narrator) -> Self {
        Self { device, out }
    }

    pub fn device(&self) -> &OfficeDevice {
        &self.device
    }

    /// 执行脚本
    pub fn execute(&mut self, script: &Script) -> ScriptResult {
        let mut result = ScriptResult {
            script_name: script.name.clone(),
            total_commands: script.commands.len(),
            applied: 0,
            ignored: 0,
        };

        for (i, command) in script.commands.iter().enumerate() {
            self.out.say(format_args!(
                "命令 {}/{}: {}",
                i + 1,
                result.total_commands,
                command_name(command)
            ));

            let outcome = self.execute_command(command);
            match outcome {
                CommandOutcome::Ignored => result.ignored += 1,
                _ => result.applied += 1,
            }
            self.out.say(format_args!("  {}", outcome));
        }

        result
    }

    /// 执行单个命令
    pub fn execute_command(&mut self, command: &ScriptCommand) -> CommandOutcome {
        let device = &mut self.device;

        match command {
            ScriptCommand::PowerOn => lifecycle(device, LifecycleCommand::PowerOn),
            ScriptCommand::PowerOff => lifecycle(device, LifecycleCommand::PowerOff),
            ScriptCommand::StandbyOn => lifecycle(device, LifecycleCommand::StandbyOn),
            ScriptCommand::StandbyOff => lifecycle(device, LifecycleCommand::StandbyOff),

            ScriptCommand::Print { document } => {
                let before = device.print_count();
                device.print(&Document::from_file_name(document.as_str()));
                accepted(device.print_count() > before)
            },

            ScriptCommand::Scan { format } => produced(device.scan(*format)),

            ScriptCommand::ScanAndPrint => produced(device.scan_and_print()),

            ScriptCommand::SendFax { document } => {
                let before = device.fax_sent_count();
                device.send_fax(&Document::from_file_name(document.as_str()));
                accepted(device.fax_sent_count() > before)
            },

            ScriptCommand::ReceiveFax => produced(device.receive_fax()),

            ScriptCommand::Status => CommandOutcome::Status(device.snapshot()),
        }
    }
}

fn lifecycle(device: &mut OfficeDevice, command: LifecycleCommand) -> CommandOutcome {
    device.apply(command);
    CommandOutcome::Applied
}

fn accepted(changed: bool) -> CommandOutcome {
    if changed {
        CommandOutcome::Applied
    } else {
        CommandOutcome::Ignored
    }
}

fn produced(document: Option<Document>) -> CommandOutcome {
    document.map_or(CommandOutcome::Ignored, CommandOutcome::Produced)
}

fn command_name(command: &ScriptCommand) -> String {
    match command {
        ScriptCommand::PowerOn => "power_on".to_string(),
        ScriptCommand::PowerOff => "power_off".to_string(),
        ScriptCommand::StandbyOn => "standby_on".to_string(),
        ScriptCommand::StandbyOff => "standby_off".to_string(),
        ScriptCommand::Print { document } => format!("print {document}"),
        ScriptCommand::Scan { format } => format!("scan ({format})"),
        ScriptCommand::ScanAndPrint => "scan_and_print".to_string(),
        ScriptCommand::SendFax { document } => format!("send_fax {document}"),
        ScriptCommand::ReceiveFax => "receive_fax".to_string(),
        ScriptCommand::Status => "status".to_string(),
    }
}
