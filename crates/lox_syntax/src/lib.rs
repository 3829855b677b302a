//! Lox Syntax
//!
//! 前端：词法分析 (logos) → 递归下降解析 → 表达式树。
//!
//! ```rust
//! use lox_diagnostics::DiagnosticSink;
//! use lox_syntax::{ast::render, lexer::scan, parser::parse};
//!
//! let mut sink = DiagnosticSink::new();
//! let tokens = scan("1 + 2 * 3", &mut sink);
//! let expr = parse(&tokens, &mut sink).unwrap();
//! assert_eq!(render(&expr), "(+ 1 (* 2 3))");
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;

pub use lexer::{scan, LexError, TokenKind};
pub use parser::{parse, parse_prefix, ParseFailure};
pub use token::Token;
