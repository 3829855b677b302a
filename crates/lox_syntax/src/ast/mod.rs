pub mod expr;
pub mod printer;
pub mod visitor;

// 重新导出核心类型，方便外部直接使用 lox_syntax::ast::Expr 等
pub use expr::{BinaryOp, Expr, Literal, UnaryOp};
pub use printer::{render, Printer};
pub use visitor::Visitor;
