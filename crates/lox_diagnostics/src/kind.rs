//! DiagnosticKind - 诊断类别
//!
//! 区分词法错误、语法错误与运行时错误，决定输出格式和宿主的退出码

use colored::*;
use std::fmt;

/// 诊断类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// 词法错误 - 扫描继续
    Lexical,
    /// 语法错误 - 放弃本次解析
    Syntax,
    /// 运行时错误 - 终止本次求值
    Runtime,
}

impl DiagnosticKind {
    /// 获取类别名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lexical => "lexical error",
            Self::Syntax => "syntax error",
            Self::Runtime => "runtime error",
        }
    }

    /// 获取带颜色的错误标签
    pub fn colored_tag(&self) -> ColoredString {
        match self {
            Self::Lexical | Self::Syntax => "Error".red().bold(),
            Self::Runtime => "Error".magenta().bold(),
        }
    }

    /// 是否为静态错误（词法或语法），对应退出码 65
    pub fn is_static(&self) -> bool {
        matches!(self, Self::Lexical | Self::Syntax)
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
