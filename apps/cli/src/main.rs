//! # Office CLI
//!
//! Command-line interface for the office device simulator.
//!
//! ```bash
//! # 生成默认配置（复印机，打印批次 3，扫描批次 2）
//! office-cli config init
//!
//! # 运行内置演示
//! office-cli demo copier
//! office-cli demo batching
//! office-cli demo multifunction --json
//!
//! # 执行 JSON 脚本
//! office-cli run --script jobs.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod output;
mod script;

use commands::{ConfigCommand, DemoCommand, RunCommand};

/// Office CLI - 办公设备模拟器命令行工具
#[derive(Parser, Debug)]
#[command(name = "office-cli")]
#[command(about = "Command-line interface for the office device simulator", long_about = None)]
#[command(version)]
struct Cli {
    /// 设备配置文件（默认：<config_dir>/office/device.toml）
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 配置管理
    #[command(subcommand)]
    Config(ConfigCommand),

    /// 运行内置演示场景
    Demo {
        #[command(flatten)]
        args: DemoCommand,
    },

    /// 执行脚本
    Run {
        #[command(flatten)]
        args: RunCommand,
    },
}

fn main() -> Result<()> {
    // 初始化日志（输出到 stderr，RUST_LOG 可覆盖）
    office_sdk::init_logging().context("初始化日志失败")?;

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Config(cmd) => cmd.execute(config_path),

        Commands::Demo { args } => args.execute(config_path),

        Commands::Run { args } => args.execute(config_path),
    }
}
