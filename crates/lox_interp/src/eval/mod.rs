//! Expression Evaluation
//!
//! 树遍历求值的主入口，各类运算分散到子模块。
//! 子表达式先于运算符求值，二元运算严格先左后右。

mod binary;
mod unary;


use lox_diagnostics::Reporter;
use lox_syntax::ast::{Expr, Visitor};

use crate::error::RuntimeResult;
use crate::value::Value;

/// 表达式求值器（无状态，每次求值相互独立）
#[derive(Debug, Default)]
pub struct Interpreter;

impl Interpreter {
    pub fn new() -> Self {
        Self
    }

    /// 对表达式求值
    pub fn evaluate(&mut self, expr: &Expr) -> RuntimeResult<Value> {
        self.visit_expr(expr)
    }

    /// 求值并把运行时错误报告给宿主
    ///
    /// 成功时返回值，由宿主负责输出
    pub fn interpret(&mut self, expr: &Expr, reporter: &mut dyn Reporter) -> Option<Value> {
        match self.evaluate(expr) {
            Ok(value) => Some(value),
            Err(err) => {
                err.report(reporter);
                None
            }
        }
    }
}

impl Visitor<RuntimeResult<Value>> for Interpreter {
    fn visit_expr(&mut self, expr: &Expr) -> RuntimeResult<Value> {
        match expr {
            Expr::Literal(literal) => Ok(Value::from(literal)),
            Expr::Grouping(inner) => self.visit_expr(inner),
            Expr::Unary { op, token, right } => {
                let right = self.visit_expr(right)?;
                unary::eval_unary(*op, token, right)
            }
            Expr::Binary {
                left,
                op,
                token,
                right,
            } => {
                let left = self.visit_expr(left)?;
                let right = self.visit_expr(right)?;
                binary::eval_binary(*op, token, left, right)
            }
            Expr::Ternary {
                condition,
                then_branch,
                else_branch,
            } => {
                // 只求值被选中的分支
                if self.visit_expr(condition)?.is_truthy() {
                    self.visit_expr(then_branch)
                } else {
                    self.visit_expr(else_branch)
                }
            }
        }
    }
}

/// 对表达式求值
pub fn evaluate(expr: &Expr) -> RuntimeResult<Value> {
    Interpreter::new().evaluate(expr)
}

/// 求值并报告运行时错误
pub fn interpret(expr: &Expr, reporter: &mut dyn Reporter) -> Option<Value> {
    Interpreter::new().interpret(expr, reporter)
}
