//! Token - 词法单元
//!
//! 词法分析器的输出：类别、原始文本、可选字面量值以及所在行

use crate::ast::Literal;
use crate::lexer::TokenKind;
use lox_diagnostics::Span;
use std::fmt;

/// 词法单元，创建后不可变
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// 类别
    pub kind: TokenKind,
    /// 源码中的原始文本
    pub lexeme: String,
    /// 数字或字符串的字面量值
    pub literal: Option<Literal>,
    /// 词素结束处所在的行
    pub line: usize,
    /// 字节范围
    pub span: Span,
}

impl Token {
    /// 创建不带字面量值的词法单元
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
            span,
        }
    }

    /// 附加字面量值
    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literal = Some(literal);
        self
    }

    /// 输入结束标记
    pub fn eof(line: usize, offset: usize) -> Self {
        Self::new(TokenKind::Eof, "", line, offset..offset)
    }

    /// 错误信息中的位置描述: " at end" 或 " at '<lexeme>'"
    pub fn location(&self) -> String {
        if self.kind == TokenKind::Eof {
            " at end".to_string()
        } else {
            format!(" at '{}'", self.lexeme)
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.kind, self.lexeme)?;
        match &self.literal {
            Some(literal) => write!(f, " {}", literal),
            None => write!(f, " nil"),
        }
    }
}
