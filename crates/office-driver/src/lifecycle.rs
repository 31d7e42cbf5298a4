//! 生命周期命令
//!
//! PowerOn / PowerOff / StandbyOn / StandbyOff 都归结为一次 `set_state`：
//!
//! | 命令 | 目标状态 |
//! |------|----------|
//! | PowerOn | On |
//! | PowerOff | Off |
//! | StandbyOn | Standby |
//! | StandbyOff | On |
//!
//! 所有设备（单个模块或组合设备）都通过 [`apply_lifecycle_command`] 执行命令，
//! 调用方一般使用 [`Lifecycle`] 扩展 Trait 的便捷方法。

use office_protocol::{DeviceState, ProtocolError};
use std::fmt;
use std::str::FromStr;

/// 具有就绪状态的设备
pub trait Device {
    fn state(&self) -> DeviceState;

    /// 无条件设置状态（组合设备会扇出到所有模块）
    fn set_state(&mut self, state: DeviceState);
}

/// 生命周期命令
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LifecycleCommand {
    PowerOn,
    PowerOff,
    StandbyOn,
    StandbyOff,
}

impl LifecycleCommand {
    /// 命令对应的目标状态
    pub fn target_state(self) -> DeviceState {
        match self {
            LifecycleCommand::PowerOn | LifecycleCommand::StandbyOff => DeviceState::On,
            LifecycleCommand::PowerOff => DeviceState::Off,
            LifecycleCommand::StandbyOn => DeviceState::Standby,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LifecycleCommand::PowerOn => "power_on",
            LifecycleCommand::PowerOff => "power_off",
            LifecycleCommand::StandbyOn => "standby_on",
            LifecycleCommand::StandbyOff => "standby_off",
        }
    }
}

impl fmt::Display for LifecycleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecycleCommand {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "power_on" | "on" => Ok(LifecycleCommand::PowerOn),
            "power_off" | "off" => Ok(LifecycleCommand::PowerOff),
            "standby_on" | "standby" => Ok(LifecycleCommand::StandbyOn),
            "standby_off" | "wake" => Ok(LifecycleCommand::StandbyOff),
            _ => Err(ProtocolError::UnknownCommand(s.to_string())),
        }
    }
}

/// 执行生命周期命令
///
/// 不做转换检查：例如在 `Off` 状态下执行 `StandbyOff` 会直接开机。
pub fn apply_lifecycle_command<D: Device + ?Sized>(device: &mut D, command: LifecycleCommand) {
    device.set_state(command.target_state());
}

/// 生命周期便捷方法（对所有 [`Device`] 自动实现）
pub trait Lifecycle: Device {
    fn power_on(&mut self) {
        apply_lifecycle_command(self, LifecycleCommand::PowerOn);
    }

    fn power_off(&mut self) {
        apply_lifecycle_command(self, LifecycleCommand::PowerOff);
    }

    fn standby_on(&mut self) {
        apply_lifecycle_command(self, LifecycleCommand::StandbyOn);
    }

    fn standby_off(&mut self) {
        apply_lifecycle_command(self, LifecycleCommand::StandbyOff);
    }

    /// 执行任意生命周期命令（脚本、命令行解析的结果）
    fn apply(&mut self, command: LifecycleCommand) {
        apply_lifecycle_command(self, command);
    }
}

impl<D: Device + ?Sized> Lifecycle for D {}
