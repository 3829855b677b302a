//! Lox Interpreter
//!
//! 树遍历求值器：
//! - [`Value`] - 动态类型的运行时值
//! - [`RuntimeError`] - 类型错误，带出错运算符的位置
//! - [`Interpreter`] - 对表达式树求值
//!
//! 运算数的类型检查统一在 `operators` 模块完成。

pub mod error;
pub mod eval;
mod operators;
pub mod value;

pub use error::{RuntimeError, RuntimeResult};
pub use eval::{evaluate, interpret, Interpreter};
pub use value::Value;
