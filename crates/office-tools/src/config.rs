//! # 设备配置
//!
//! 描述要模拟的设备：类型、各模块批处理阈值、是否把事件回显到标准输出。
//!
//! ```toml
//! kind = "copier"
//! print_batch_threshold = 3
//! scan_batch_threshold = 2
//! # fax_batch_threshold = 5
//! echo_events = true
//! ```
//!
//! 缺省字段取默认值，因此空文件也是合法配置。

use office_protocol::DeviceKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// 字段取值非法
    #[error("Invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// 设备配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// 设备类型
    pub kind: DeviceKind,

    /// 打印批处理阈值（> 0）
    pub print_batch_threshold: u32,

    /// 扫描批处理阈值（> 0）
    pub scan_batch_threshold: u32,

    /// 传真批处理阈值（None 表示不启用）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax_batch_threshold: Option<u32>,

    /// 是否把设备事件回显到标准输出
    pub echo_events: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            kind: DeviceKind::Copier,
            print_batch_threshold: 3,
            scan_batch_threshold: 2,
            fax_batch_threshold: None,
            echo_events: true,
        }
    }
}

impl DeviceConfig {
    /// 从 TOML 字符串解析并校验
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DeviceConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 序列化为 TOML 字符串
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 从文件加载配置
    ///
    /// 配置文件路径（CLI 默认）：
    /// - Linux/macOS: `~/.config/office/device.toml`
    /// - Windows: `%APPDATA%\office\device.toml`
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 校验后保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        self.validate()?;
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// 检查阈值是否合法
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.print_batch_threshold == 0 {
            return Err(ConfigError::Invalid {
                field: "print_batch_threshold",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.scan_batch_threshold == 0 {
            return Err(ConfigError::Invalid {
                field: "scan_batch_threshold",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.fax_batch_threshold == Some(0) {
            return Err(ConfigError::Invalid {
                field: "fax_batch_threshold",
                reason: "must be greater than zero when set".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = DeviceConfig::default();
        assert_eq!(config.kind, DeviceKind::Copier);
        assert_eq!(config.print_batch_threshold, 3);
        assert_eq!(config.scan_batch_threshold, 2);
        assert_eq!(config.fax_batch_threshold, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = DeviceConfig::from_toml_str("").unwrap();
        assert_eq!(config, DeviceConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = DeviceConfig::from_toml_str(
            r#"
kind = "multifunction"
fax_batch_threshold = 4
echo_events = false
"#,
        )
        .unwrap();

        assert_eq!(config.kind, DeviceKind::Multifunction);
        assert_eq!(config.fax_batch_threshold, Some(4));
        assert_eq!(config.print_batch_threshold, 3);
        assert!(!config.echo_events);
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let err = DeviceConfig::from_toml_str(r#"kind = "toaster""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_threshold_is_invalid() {
        let err = DeviceConfig::from_toml_str("scan_batch_threshold = 0").unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "scan_batch_threshold"),
            other => panic!("Expected Invalid, got {other:?}"),
        }

        let config = DeviceConfig {
            fax_batch_threshold: Some(0),
            ..DeviceConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("device.toml");

        let config = DeviceConfig {
            kind: DeviceKind::Printer,
            print_batch_threshold: 5,
            scan_batch_threshold: 2,
            fax_batch_threshold: Some(7),
            echo_events: false,
        };
        config.save_to_file(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("kind = \"printer\""));

        let loaded = DeviceConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = DeviceConfig::load_from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
