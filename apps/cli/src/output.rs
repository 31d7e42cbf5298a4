//! 进度输出
//!
//! JSON 模式下 stdout 只保留统计快照，进度信息改写到 stderr。

use std::fmt::Display;

/// 进度输出目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Narrator {
    to_stderr: bool,
}

impl Narrator {
    /// `json = true` 时进度信息写到 stderr
    pub fn for_json(json: bool) -> Self {
        Self { to_stderr: json }
    }

    pub fn say(self, line: impl Display) {
        if self.to_stderr {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }

    pub fn blank(self) {
        self.say("");
    }
}
