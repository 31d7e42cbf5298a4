//! 脚本系统
//!
//! 脚本是一串针对单台设备执行的命令（JSON）：
//!
//! ```json
//! {
//!   "name": "copy-job",
//!   "description": "Power on and copy one page",
//!   "commands": [
//!     { "type": "power_on" },
//!     { "type": "print", "document": "report.pdf" },
//!     { "type": "scan", "format": "pdf" },
//!     { "type": "scan_and_print" },
//!     { "type": "status" }
//!   ]
//! }
//! ```

use crate::config::DeviceConfig;
use office_protocol::FormatType;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// 脚本错误类型
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Failed to access script file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse script JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// 脚本命令序列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// 脚本名称
    pub name: String,

    /// 脚本描述
    #[serde(default)]
    pub description: String,

    /// 脚本自带的设备配置（缺省时由执行方决定）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<DeviceConfig>,

    /// 命令序列
    pub commands: Vec<ScriptCommand>,
}

/// 脚本命令
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptCommand {
    PowerOn,
    PowerOff,
    StandbyOn,
    StandbyOff,

    /// 打印（格式由扩展名推断）
    Print { document: String },

    /// 扫描（无法识别的格式回退为图片）
    Scan {
        #[serde(default, deserialize_with = "lenient_format")]
        format: FormatType,
    },

    /// 复印
    ScanAndPrint,

    /// 发送传真（格式由扩展名推断）
    SendFax { document: String },

    /// 接收传真
    ReceiveFax,

    /// 输出当前统计
    Status,
}

fn lenient_format<'de, D>(deserializer: D) -> Result<FormatType, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|s| FormatType::parse_lenient(&s))
        .unwrap_or_default())
}

impl Script {
    /// 从 JSON 字符串解析
    pub fn from_json_str(content: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(content)?)
    }

    /// 加载脚本文件
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// 保存脚本文件
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ScriptError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
