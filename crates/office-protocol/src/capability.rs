//! 能力与设备类型
//!
//! 设备类型在构造时声明自己暴露的能力集合。

use crate::ProtocolError;
use std::fmt;
use std::str::FromStr;

/// 单项设备能力
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Capability {
    Print,
    Scan,
    Fax,
}

impl Capability {
    pub const ALL: [Capability; 3] = [Capability::Print, Capability::Scan, Capability::Fax];

    pub fn as_str(self) -> &'static str {
        match self {
            Capability::Print => "print",
            Capability::Scan => "scan",
            Capability::Fax => "fax",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "print" | "printer" => Ok(Capability::Print),
            "scan" | "scanner" => Ok(Capability::Scan),
            "fax" => Ok(Capability::Fax),
            _ => Err(ProtocolError::UnknownCapability(s.to_string())),
        }
    }
}

/// 设备类型（能力集合）
///
/// | 类型 | 打印 | 扫描 | 传真 |
/// |------|------|------|------|
/// | Printer | ✓ | | |
/// | Scanner | | ✓ | |
/// | Copier | ✓ | ✓ | |
/// | Multifunction | ✓ | ✓ | ✓ |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeviceKind {
    Printer,
    Scanner,
    #[default]
    Copier,
    Multifunction,
}

impl DeviceKind {
    /// 该类型声明的能力集合
    pub fn capabilities(self) -> &'static [Capability] {
        match self {
            DeviceKind::Printer => &[Capability::Print],
            DeviceKind::Scanner => &[Capability::Scan],
            DeviceKind::Copier => &[Capability::Print, Capability::Scan],
            DeviceKind::Multifunction => &Capability::ALL,
        }
    }

    pub fn supports(self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeviceKind::Printer => "printer",
            DeviceKind::Scanner => "scanner",
            DeviceKind::Copier => "copier",
            DeviceKind::Multifunction => "multifunction",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceKind {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "printer" => Ok(DeviceKind::Printer),
            "scanner" => Ok(DeviceKind::Scanner),
            "copier" => Ok(DeviceKind::Copier),
            "multifunction" | "mfd" => Ok(DeviceKind::Multifunction),
            _ => Err(ProtocolError::UnknownDeviceKind(s.to_string())),
        }
    }
}
