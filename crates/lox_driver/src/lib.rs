//! Lox Driver
//!
//! 驱动模块，串联 扫描 → 解析 → 求值 三个阶段
//!
//! 三个阶段共享同一个 reporter。存在词法或语法错误时跳过求值。

pub mod error;

pub use error::{exit, RunError, RunResult};

use lox_diagnostics::Reporter;
use lox_interp::{interpret, Value};
use lox_syntax::ast::Expr;
use lox_syntax::{parse, scan, Token};
use std::path::Path;

/// 一次运行的各阶段产物
#[derive(Debug, Default)]
pub struct RunOutput {
    /// 扫描得到的 token（以 Eof 结尾）
    pub tokens: Vec<Token>,
    /// 解析成功时的表达式树
    pub expr: Option<Expr>,
    /// 求值成功时的结果
    pub value: Option<Value>,
}

/// 运行一段源码
///
/// 错误全部报告给 `reporter`，调用方通过它的标志位（或 [`RunError::check`]）判断结果。
///
/// # Example
/// ```
/// use lox_diagnostics::DiagnosticSink;
/// use lox_driver::run;
///
/// let mut sink = DiagnosticSink::new();
/// let output = run("(1 + 2) * 3", &mut sink);
/// assert_eq!(output.value.unwrap().to_string(), "9.000000");
/// ```
pub fn run(source: &str, reporter: &mut dyn Reporter) -> RunOutput {
    let tokens = scan(source, reporter);
    let expr = parse(&tokens, reporter).ok();

    let value = match &expr {
        Some(expr) if !reporter.had_error() => interpret(expr, reporter),
        _ => None,
    };

    RunOutput {
        tokens,
        expr,
        value,
    }
}

/// 读取脚本文件
///
/// 非 UTF-8 的字节按替换字符处理，交给扫描器报告
pub fn read_source(path: &Path) -> RunResult<String> {
    let bytes = std::fs::read(path).map_err(|source| RunError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// 从文件运行
///
/// 返回源码与运行产物，源码供渲染带片段的诊断使用
pub fn run_file(path: &Path, reporter: &mut dyn Reporter) -> RunResult<(String, RunOutput)> {
    let source = read_source(path)?;
    let output = run(&source, reporter);
    Ok((source, output))
}
