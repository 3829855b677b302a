//! Runtime Error Types
//!
//! 求值过程中的类型错误，只终止当前这一次求值

use lox_diagnostics::{Diagnostic, Reporter};
use lox_syntax::Token;
use thiserror::Error;

/// 运行时错误
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct RuntimeError {
    /// 出错的运算符，用于定位行号
    pub token: Token,
    pub message: String,
}

impl RuntimeError {
    pub fn new(token: &Token, message: impl Into<String>) -> Self {
        Self {
            token: token.clone(),
            message: message.into(),
        }
    }

    /// 转换为诊断
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::runtime(self.token.line, self.message.clone()).span(self.token.span.clone())
    }

    /// 报告给宿主，同时置位运行时错误标志
    pub fn report(&self, reporter: &mut dyn Reporter) {
        reporter.add(self.to_diagnostic());
    }
}

/// 求值结果类型
pub type RuntimeResult<T> = Result<T, RuntimeError>;
