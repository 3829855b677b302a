//! Printer - 表达式树的前缀表示
//!
//! 仅用于调试：`1 + 2` 渲染为 `(+ 1 2)`，`a ? b : c` 渲染为 `(?: a b c)`。
//! 输出可以被 [`crate::parser::parse_prefix`] 读回。

use super::{Expr, Visitor};

/// 前缀表示渲染器
#[derive(Debug, Default)]
pub struct Printer;

impl Printer {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&mut self, expr: &Expr) -> String {
        self.visit_expr(expr)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = format!("({}", name);
        for expr in exprs {
            out.push(' ');
            out.push_str(&self.visit_expr(expr));
        }
        out.push(')');
        out
    }
}

impl Visitor<String> for Printer {
    fn visit_expr(&mut self, expr: &Expr) -> String {
        match expr {
            Expr::Literal(literal) => literal.to_string(),
            Expr::Grouping(inner) => self.parenthesize("group", &[inner.as_ref()]),
            Expr::Unary { op, right, .. } => self.parenthesize(op.symbol(), &[right.as_ref()]),
            Expr::Binary {
                left, op, right, ..
            } => self.parenthesize(op.symbol(), &[left.as_ref(), right.as_ref()]),
            Expr::Ternary {
                condition,
                then_branch,
                else_branch,
            } => self.parenthesize(
                "?:",
                &[
                    condition.as_ref(),
                    then_branch.as_ref(),
                    else_branch.as_ref(),
                ],
            ),
        }
    }
}

/// 渲染表达式树
pub fn render(expr: &Expr) -> String {
    Printer::new().print(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, Literal, UnaryOp};
    use crate::lexer::TokenKind;
    use crate::token::Token;

    fn num(n: f64) -> Expr {
        Expr::Literal(Literal::Number(n))
    }

    fn tok(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, 1, 0..lexeme.len())
    }

    #[test]
    fn test_render_binary() {
        let expr = Expr::binary(num(1.0), BinaryOp::Add, tok(TokenKind::Plus, "+"), num(2.0));
        assert_eq!(render(&expr), "(+ 1 2)");
    }

    #[test]
    fn test_render_nested() {
        // -123 * (45.67)
        let expr = Expr::binary(
            Expr::unary(UnaryOp::Neg, tok(TokenKind::Minus, "-"), num(123.0)),
            BinaryOp::Mul,
            tok(TokenKind::Star, "*"),
            Expr::grouping(num(45.67)),
        );
        assert_eq!(render(&expr), "(* (- 123) (group 45.67))");
    }

    #[test]
    fn test_render_ternary_and_literals() {
        let expr = Expr::ternary(
            Expr::Literal(Literal::Bool(true)),
            Expr::Literal(Literal::String("yes".to_string())),
            Expr::Literal(Literal::Nil),
        );
        assert_eq!(render(&expr), "(?: true \"yes\" nil)");
    }
}
