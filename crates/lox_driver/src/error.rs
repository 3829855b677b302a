//! Run Errors
//!
//! 驱动层的错误类型，决定进程退出码

use lox_diagnostics::Reporter;
use std::path::PathBuf;
use thiserror::Error;

/// 进程退出码（沿用 sysexits 的约定）
pub mod exit {
    /// 命令行用法错误
    pub const USAGE: i32 = 64;
    /// 源码有词法或语法错误
    pub const DATA_ERR: i32 = 65;
    /// 求值时发生运行时错误
    pub const SOFTWARE: i32 = 70;
    /// 读取脚本失败
    pub const IO_ERR: i32 = 74;
}

/// 运行失败
#[derive(Debug, Error)]
pub enum RunError {
    /// 词法或语法错误，具体内容已经报告给 reporter
    #[error("source contains lexical or syntax errors")]
    Static,

    /// 运行时错误，具体内容已经报告给 reporter
    #[error("evaluation raised a runtime error")]
    Runtime,

    /// 读取脚本失败
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RunError {
    /// 对应的进程退出码
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Static => exit::DATA_ERR,
            RunError::Runtime => exit::SOFTWARE,
            RunError::Io { .. } => exit::IO_ERR,
        }
    }

    /// 根据 reporter 的标志位得出运行结果
    ///
    /// 静态错误优先于运行时错误
    pub fn check(reporter: &dyn Reporter) -> RunResult<()> {
        if reporter.had_error() {
            Err(RunError::Static)
        } else if reporter.had_runtime_error() {
            Err(RunError::Runtime)
        } else {
            Ok(())
        }
    }
}

/// 运行结果类型
pub type RunResult<T> = Result<T, RunError>;

#[cfg(test)]
mod tests {
    use super::*;
    use lox_diagnostics::DiagnosticSink;

    #[test]
    fn test_exit_codes() {
        assert_eq!(RunError::Static.exit_code(), 65);
        assert_eq!(RunError::Runtime.exit_code(), 70);

        let io = RunError::Io {
            path: PathBuf::from("missing.lox"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(io.exit_code(), 74);
        assert!(io.to_string().starts_with("could not read missing.lox"));
    }

    #[test]
    fn test_check_prefers_static_errors() {
        let mut sink = DiagnosticSink::new();
        assert!(RunError::check(&sink).is_ok());

        sink.runtime_error(1, "Operand must be a number.");
        assert!(matches!(RunError::check(&sink), Err(RunError::Runtime)));

        sink.error(2, "Unexpected character.");
        assert!(matches!(RunError::check(&sink), Err(RunError::Static)));
    }
}
