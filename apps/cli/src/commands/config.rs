//! 配置管理命令
//!
//! 用于管理设备配置（设备类型、批处理阈值、事件回显）

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use office_sdk::DeviceConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// 默认配置文件路径
fn default_config_file() -> Result<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法确定配置目录"))?;

    path.push("office");
    path.push("device.toml");
    Ok(path)
}

/// 命令行指定的路径优先，否则使用默认路径
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_file(),
    }
}

/// 加载配置；文件不存在时使用默认配置
pub fn load_config(explicit: Option<&Path>) -> Result<DeviceConfig> {
    let path = resolve_config_path(explicit)?;

    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(DeviceConfig::default());
    }

    DeviceConfig::load_from_file(&path)
        .with_context(|| format!("读取配置文件失败: {}", path.display()))
}

/// 配置命令
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// 显示当前生效的配置
    Show,

    /// 写入默认配置文件
    Init {
        /// 覆盖已有配置文件
        #[arg(long)]
        force: bool,
    },

    /// 显示配置文件路径
    Path,
}

impl ConfigCommand {
    pub fn execute(self, config_path: Option<&Path>) -> Result<()> {
        match self {
            ConfigCommand::Show => Self::show_(config_path),

            ConfigCommand::Init { force } => Self::init_(config_path, force),

            ConfigCommand::Path => {
                println!("{}", resolve_config_path(config_path)?.display());
                Ok(())
            },
        }
    }

    fn show_(config_path: Option<&Path>) -> Result<()> {
        let path = resolve_config_path(config_path)?;
        let config = load_config(config_path)?;

        if path.exists() {
            println!("# 配置文件: {}", path.display());
        } else {
            println!("# 配置文件不存在，使用默认配置 ({})", path.display());
        }
        print!("{}", config.to_toml_string()?);
        Ok(())
    }

    fn init_(config_path: Option<&Path>, force: bool) -> Result<()> {
        let path = resolve_config_path(config_path)?;

        if path.exists() && !force {
            bail!("配置文件已存在: {}（使用 --force 覆盖）", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("创建配置目录失败")?;
        }

        DeviceConfig::default()
            .save_to_file(&path)
            .with_context(|| format!("写入配置文件失败: {}", path.display()))?;

        println!("✅ 已写入默认配置: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use office_sdk::prelude::DeviceKind;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(Some(dir.path().join("none.toml").as_path())).unwrap();
        assert_eq!(config, DeviceConfig::default());
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = Path::new("/tmp/custom.toml");
        assert_eq!(resolve_config_path(Some(path)).unwrap(), path);
    }

    #[test]
    fn test_init_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("device.toml");

        ConfigCommand::Init { force: false }.execute(Some(path.as_path())).unwrap();
        assert!(ConfigCommand::Init { force: false }.execute(Some(path.as_path())).is_err());
        ConfigCommand::Init { force: true }.execute(Some(path.as_path())).unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.kind, DeviceKind::Copier);
    }
}
