//! DiagnosticSink - 诊断收集器
//!
//! 收集一次运行中的所有诊断，并维护两个粘滞标志

use crate::diagnostic::Diagnostic;
use crate::kind::DiagnosticKind;
use crate::reporter::Reporter;

/// 诊断收集器
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    /// 尚未输出的诊断
    diagnostics: Vec<Diagnostic>,
    /// 是否有词法/语法错误
    had_error: bool,
    /// 是否有运行时错误
    had_runtime_error: bool,
}

impl DiagnosticSink {
    /// 创建新的诊断收集器
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取所有诊断
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// 取走已收集的诊断，标志位保持不变
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// 获取静态错误（词法+语法）数量
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.kind.is_static())
            .count()
    }

    /// 获取运行时错误数量
    pub fn runtime_error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.kind, DiagnosticKind::Runtime))
            .count()
    }

    /// 获取诊断数量
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl Reporter for DiagnosticSink {
    fn add(&mut self, diagnostic: Diagnostic) {
        if diagnostic.kind.is_static() {
            self.had_error = true;
        } else {
            self.had_runtime_error = true;
        }
        self.diagnostics.push(diagnostic);
    }

    fn had_error(&self) -> bool {
        self.had_error
    }

    fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_creation() {
        let sink = DiagnosticSink::new();
        assert!(!sink.had_error());
        assert!(!sink.had_runtime_error());
        assert_eq!(sink.len(), 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_add_diagnostic() {
        let mut sink = DiagnosticSink::new();

        sink.add(Diagnostic::lexical(1, "Unexpected character."));
        assert!(sink.had_error());
        assert!(!sink.had_runtime_error());
        assert_eq!(sink.error_count(), 1);

        sink.add(Diagnostic::runtime(1, "Operand must be a number."));
        assert!(sink.had_runtime_error());
        assert_eq!(sink.runtime_error_count(), 1);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_reporter_methods() {
        let mut sink = DiagnosticSink::new();

        sink.error(1, "Unexpected character.");
        sink.report(2, " at end", "Expect expression.");
        sink.runtime_error(3, "Operand must be a number.");

        let rendered: Vec<String> = sink.diagnostics().iter().map(|d| d.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "[line 1] Error: Unexpected character.",
                "[line 2] Error at end: Expect expression.",
                "Operand must be a number.\n[line 3]",
            ]
        );
    }

    #[test]
    fn test_flags_are_sticky() {
        let mut sink = DiagnosticSink::new();
        sink.error(1, "Unexpected character.");
        sink.runtime_error(1, "Operand must be a number.");

        let taken = sink.take_diagnostics();
        assert_eq!(taken.len(), 2);
        assert!(sink.is_empty());
        assert!(sink.had_error());
        assert!(sink.had_runtime_error());
    }
}
