//! Emitter - 诊断输出器
//!
//! 负责将诊断信息格式化输出到标准错误

use crate::diagnostic::Diagnostic;
use crate::kind::DiagnosticKind;
use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use colored::*;

/// 诊断输出器
pub struct Emitter {
    /// 是否使用颜色
    use_colors: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    /// 创建新的输出器
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// 创建无颜色的输出器
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// 按开关决定是否着色
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// 输出单个诊断
    pub fn emit(&self, diagnostic: &Diagnostic) {
        eprintln!("{}", self.render(diagnostic));
    }

    /// 输出所有诊断
    pub fn emit_all(&self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    /// 输出诊断，带源码片段（如果诊断有位置信息）
    pub fn emit_with_source(&self, diagnostic: &Diagnostic, source: &str, file_name: &str) {
        eprint!("{}", self.render_with_source(diagnostic, source, file_name));
    }

    /// 渲染为单行（运行时错误为两行）文本
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        if !self.use_colors {
            return diagnostic.to_string();
        }

        match diagnostic.kind {
            DiagnosticKind::Lexical | DiagnosticKind::Syntax => format!(
                "[line {}] {}{}: {}",
                diagnostic.line,
                diagnostic.kind.colored_tag(),
                diagnostic.location,
                diagnostic.message.bold()
            ),
            DiagnosticKind::Runtime => format!(
                "{}\n{}",
                diagnostic.message.bold(),
                format!("[line {}]", diagnostic.line).bright_black()
            ),
        }
    }

    /// 使用 ariadne 渲染源码片段，没有位置信息时退回 [`Emitter::render`]
    pub fn render_with_source(&self, diagnostic: &Diagnostic, source: &str, file_name: &str) -> String {
        let Some(span) = diagnostic.span.clone() else {
            return format!("{}\n", self.render(diagnostic));
        };

        let (kind, color) = match diagnostic.kind {
            DiagnosticKind::Lexical | DiagnosticKind::Syntax => (ReportKind::Error, Color::Red),
            DiagnosticKind::Runtime => (ReportKind::Custom("Runtime error", Color::Magenta), Color::Magenta),
        };

        // 诊断记录的是字节偏移，ariadne 按字符计数
        let span = char_offset(source, span.start)..char_offset(source, span.end);

        let mut out = Vec::new();
        let written = Report::build(kind, file_name, span.start)
            .with_config(Config::default().with_color(self.use_colors))
            .with_message(&diagnostic.message)
            .with_label(
                Label::new((file_name, span))
                    .with_message(format!("[line {}]{}", diagnostic.line, diagnostic.location))
                    .with_color(color),
            )
            .finish()
            .write((file_name, Source::from(source)), &mut out);

        match written {
            Ok(()) => String::from_utf8_lossy(&out).into_owned(),
            Err(_) => format!("{}\n", self.render(diagnostic)),
        }
    }
}

/// 字节偏移 → 字符偏移；越界或落在字符中间时取到末尾
fn char_offset(source: &str, byte: usize) -> usize {
    match source.get(..byte) {
        Some(prefix) => prefix.chars().count(),
        None => source.chars().count(),
    }
}
