//! 设备就绪状态定义

use crate::ProtocolError;
use std::fmt;
use std::str::FromStr;

/// 设备就绪状态
///
/// 每个能力模块持有独立的状态；组合设备的状态由模块状态推导得出。
///
/// ```text
/// Off ──On──▶ On ──Standby──▶ Standby
///  ▲          │                 │
///  └───Off────┴──────Off────────┘
///             ◀───────On────────
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum DeviceState {
    /// 关机（初始状态）
    #[default]
    Off = 0,
    /// 开机，可接受作业
    On = 1,
    /// 待机：已通电但不接受新作业
    Standby = 2,
}

impl DeviceState {
    /// 是否可以接受新作业
    ///
    /// 只有 `On` 接受作业，`Standby` 与 `Off` 同样阻止作业。
    pub fn accepts_jobs(self) -> bool {
        self == Self::On
    }

    /// 由多个模块状态推导聚合状态
    ///
    /// - 全部 `Off` → `Off`（空集合同样视为 `Off`）
    /// - 全部 `Standby` → `Standby`
    /// - 其他（包括混合状态）→ `On`
    pub fn aggregate<I>(states: I) -> Self
    where
        I: IntoIterator<Item = DeviceState>,
    {
        let mut all_off = true;
        let mut all_standby = true;
        let mut empty = true;
        for state in states {
            empty = false;
            all_off &= state == Self::Off;
            all_standby &= state == Self::Standby;
        }

        if empty || all_off {
            Self::Off
        } else if all_standby {
            Self::Standby
        } else {
            Self::On
        }
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeviceState::Off => "OFF",
            DeviceState::On => "ON",
            DeviceState::Standby => "STANDBY",
        };
        f.write_str(name)
    }
}

impl FromStr for DeviceState {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(DeviceState::Off),
            "on" => Ok(DeviceState::On),
            "standby" => Ok(DeviceState::Standby),
            _ => Err(ProtocolError::UnknownState(s.to_string())),
        }
    }
}
