//! 文档定义
//!
//! 文档是不透明的命名记录：只有文件名和格式，没有内容。

use std::fmt;
use std::str::FromStr;

/// 文档格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FormatType {
    /// 纯文本（.txt）
    Text,
    /// PDF（.pdf）
    Pdf,
    /// 图片（.jpg），扫描的默认格式
    #[default]
    Image,
}

impl FormatType {
    /// 文件扩展名（不含点）
    pub fn extension(self) -> &'static str {
        match self {
            FormatType::Text => "txt",
            FormatType::Pdf => "pdf",
            FormatType::Image => "jpg",
        }
    }

    /// 宽松解析
    ///
    /// 无法识别的输入回退为 `Image`，不会失败。
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "txt" | "text" => FormatType::Text,
            "pdf" => FormatType::Pdf,
            _ => FormatType::Image,
        }
    }
}

impl FromStr for FormatType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatType::Text => "TEXT",
            FormatType::Pdf => "PDF",
            FormatType::Image => "IMAGE",
        };
        f.write_str(name)
    }
}

/// 模拟文档
///
/// 创建后不可变。由调用方构造（待打印/待发送），
/// 或由扫描、传真接收等操作产生并移交给调用方。
///
/// # 示例
///
/// ```rust
/// use office_protocol::{Document, FormatType};
///
/// let doc = Document::pdf("report.pdf");
/// assert_eq!(doc.name(), "report.pdf");
/// assert_eq!(doc.format(), FormatType::Pdf);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    name: String,
    format: FormatType,
}

impl Document {
    pub fn new(name: impl Into<String>, format: FormatType) -> Self {
        Self {
            name: name.into(),
            format,
        }
    }

    pub fn pdf(name: impl Into<String>) -> Self {
        Self::new(name, FormatType::Pdf)
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FormatType::Text)
    }

    pub fn image(name: impl Into<String>) -> Self {
        Self::new(name, FormatType::Image)
    }

    /// 按文件扩展名推断格式，无法识别的扩展名回退为 `Image`
    pub fn from_file_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let format = name
            .rsplit_once('.')
            .map_or(FormatType::Image, |(_, ext)| FormatType::parse_lenient(ext));
        Self::new(name, format)
    }

    /// 按序号生成文档：`<prefix><seq>.<ext>`
    ///
    /// 扫描使用前缀 `Scan`，传真接收使用 `FaxReceived`。
    pub fn numbered(prefix: &str, seq: u64, format: FormatType) -> Self {
        Self::new(format!("{}{}.{}", prefix, seq, format.extension()), format)
    }

    /// 文件名
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> FormatType {
        self.format
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
