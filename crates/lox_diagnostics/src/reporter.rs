//! Reporter - 错误报告接口
//!
//! 词法分析器、解析器与求值器只依赖这个 trait 报告错误，
//! 具体的收集与输出方式由宿主决定（见 [`crate::DiagnosticSink`]）

use crate::diagnostic::Diagnostic;

/// 错误报告接口
///
/// 两个标志位只能被置位，在一次宿主运行期间不会被清除。
pub trait Reporter {
    /// 记录一条诊断
    fn add(&mut self, diagnostic: Diagnostic);

    /// 是否报告过词法或语法错误
    fn had_error(&self) -> bool;

    /// 是否报告过运行时错误
    fn had_runtime_error(&self) -> bool;

    /// 报告不带位置描述的词法错误
    fn error(&mut self, line: usize, message: &str) {
        self.add(Diagnostic::lexical(line, message));
    }

    /// 报告带位置描述的语法错误
    fn report(&mut self, line: usize, location: &str, message: &str) {
        self.add(Diagnostic::syntax(line, message).at(location));
    }

    /// 报告运行时错误
    fn runtime_error(&mut self, line: usize, message: &str) {
        self.add(Diagnostic::runtime(line, message));
    }
}
