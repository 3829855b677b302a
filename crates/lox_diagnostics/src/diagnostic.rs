//! Diagnostic - 诊断信息
//!
//! 表示一条带行号的诊断（词法、语法或运行时错误）

use crate::kind::DiagnosticKind;
use crate::span::Span;
use std::fmt;

/// 诊断信息
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// 诊断类别
    pub kind: DiagnosticKind,
    /// 主要消息
    pub message: String,
    /// 源码行号（从 1 开始）
    pub line: usize,
    /// 位置描述，例如 " at end" 或 " at '+'"，可以为空
    pub location: String,
    /// 源码字节范围（可选，用于源码片段渲染）
    pub span: Option<Span>,
}

impl Diagnostic {
    /// 创建新的诊断
    pub fn new(kind: DiagnosticKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            location: String::new(),
            span: None,
        }
    }

    /// 创建词法错误诊断
    pub fn lexical(line: usize, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Lexical, line, message)
    }

    /// 创建语法错误诊断
    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Syntax, line, message)
    }

    /// 创建运行时错误诊断
    pub fn runtime(line: usize, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Runtime, line, message)
    }

    /// 设置位置描述
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// 设置位置信息
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

/// 诊断的文本格式：
///
/// - 词法/语法错误：`[line N] Error<where>: <message>`
/// - 运行时错误：`<message>\n[line N]`
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::Lexical | DiagnosticKind::Syntax => write!(
                f,
                "[line {}] Error{}: {}",
                self.line, self.location, self.message
            ),
            DiagnosticKind::Runtime => write!(f, "{}\n[line {}]", self.message, self.line),
        }
    }
}
