//! run 命令
//!
//! 执行脚本文件

use anyhow::{Context, Result};
use clap::Args;
use office_sdk::DeviceBuilder;
use office_sdk::tools::Script;
use std::path::{Path, PathBuf};

use super::config::load_config;
use crate::output::Narrator;
use crate::script::ScriptExecutor;

/// 脚本执行命令参数
#[derive(Args, Debug)]
pub struct RunCommand {
    /// 脚本文件路径
    #[arg(short, long)]
    pub script: PathBuf,

    /// 结束时以 JSON 输出统计快照
    #[arg(long)]
    pub json: bool,
}

impl RunCommand {
    /// 执行脚本
    ///
    /// 脚本自带设备配置时优先使用，否则使用配置文件。
    /// `--json` 时进度信息写到 stderr，stdout 只输出统计快照。
    pub fn execute(&self, config_path: Option<&Path>) -> Result<()> {
        let out = Narrator::for_json(self.json);
        out.say(format_args!("📜 加载脚本: {}", self.script.display()));

        let script = Script::load(&self.script)
            .with_context(|| format!("读取脚本失败: {}", self.script.display()))?;

        let mut config = match &script.device {
            Some(device) => device.clone(),
            None => load_config(config_path)?,
        };
        config.validate().context("脚本中的设备配置无效")?;
        // JSON 模式下事件行不写入 stdout
        config.echo_events &= !self.json;

        out.say(format_args!("📋 脚本: {}", script.name));
        if !script.description.is_empty() {
            out.say(format_args!("    {}", script.description));
        }
        out.say(format_args!("    设备: {}", config.kind));
        out.say(format_args!("    {} 个命令", script.commands.len()));
        out.blank();

        let device = DeviceBuilder::from_config(&config).build()?;
        let mut executor = ScriptExecutor::new(device, out);
        let result = executor.execute(&script);

        out.blank();
        out.say(format_args!("📊 执行结果: {}", result.script_name));
        out.say(format_args!("  总命令数: {}", result.total_commands));
        out.say(format_args!("  生效: {}", result.applied));
        out.say(format_args!("  忽略: {}", result.ignored));

        let snapshot = executor.device().snapshot();
        if self.json {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        } else {
            out.blank();
            print!("{}", snapshot);
        }

        Ok(())
    }
}
