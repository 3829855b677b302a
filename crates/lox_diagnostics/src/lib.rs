//! Lox Diagnostics
//!
//! 统一的诊断系统：词法、语法、运行时错误都经由同一个报告接口。
//!
//! # 核心类型
//!
//! - [`Diagnostic`] - 诊断信息主体
//! - [`DiagnosticKind`] - 诊断类别（Lexical/Syntax/Runtime）
//! - [`Reporter`] - 报告接口，前端与求值器只依赖它
//! - [`DiagnosticSink`] - 诊断收集器，维护两个粘滞标志
//! - [`Emitter`] - 诊断输出器
//! - [`Span`] - 源码位置信息
//!
//! # 示例
//!
//! ```rust
//! use lox_diagnostics::{Diagnostic, DiagnosticSink, Emitter, Reporter};
//!
//! let mut sink = DiagnosticSink::new();
//!
//! sink.add(Diagnostic::syntax(1, "Expect expression.").at(" at end"));
//!
//! if sink.had_error() {
//!     let emitter = Emitter::without_colors();
//!     emitter.emit_all(sink.diagnostics());
//! }
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod kind;
pub mod reporter;
pub mod sink;
pub mod span;

// 重新导出核心类型
pub use diagnostic::Diagnostic;
pub use emitter::Emitter;
pub use kind::DiagnosticKind;
pub use reporter::Reporter;
pub use sink::DiagnosticSink;
pub use span::Span;
