//! Prefix Reader
//!
//! 读回 Printer 的前缀表示：
//!
//! ```text
//! prefix → literal
//!        | "(" "group" prefix ")"
//!        | "(" "?" ":" prefix prefix prefix ")"
//!        | "(" "!" prefix ")"
//!        | "(" "-" prefix prefix? ")"
//!        | "(" binop prefix prefix ")"
//! ```

use super::{ParseResult, Parser, MAX_HEIGHT};
use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::lexer::TokenKind;

impl<'a> Parser<'a> {
    /// 前缀表示的每层括号对应树的一层，因此嵌套上限就是树高上限
    pub(super) fn prefix_expr(&mut self) -> ParseResult<Expr> {
        if let Some(literal) = self.literal()? {
            return Ok(literal);
        }

        let paren = self.consume(TokenKind::LeftParen, "Expect expression.")?;
        self.descend(MAX_HEIGHT)?;
        let mut height = 0;

        let expr = if self.check_group() {
            self.advance();
            Expr::grouping(self.prefix_operand(&mut height)?)
        } else if self.match_any(&[TokenKind::Question]) {
            self.consume(TokenKind::Colon, "Expect ':' after '?'.")?;
            let condition = self.prefix_operand(&mut height)?;
            let then_branch = self.prefix_operand(&mut height)?;
            let else_branch = self.prefix_operand(&mut height)?;
            Expr::ternary(condition, then_branch, else_branch)
        } else if self.match_any(&[TokenKind::Bang]) {
            let token = self.previous().clone();
            Expr::unary(UnaryOp::Not, token, self.prefix_operand(&mut height)?)
        } else if let Some(op) = BinaryOp::from_token(self.peek().kind) {
            let token = self.advance().clone();
            let left = self.prefix_operand(&mut height)?;
            // `(- x)` 是取负，`(- x y)` 是减法
            if op == BinaryOp::Sub && self.check(TokenKind::RightParen) {
                Expr::unary(UnaryOp::Neg, token, left)
            } else {
                let right = self.prefix_operand(&mut height)?;
                Expr::binary(left, op, token, right)
            }
        } else {
            return Err(self.error_at_current("Expect operator."));
        };

        self.consume(TokenKind::RightParen, "Expect ')' after operands.")?;
        self.ascend();
        self.grow(&paren, height + 1)?;
        Ok(expr)
    }

    /// 读一个运算数，并把它的高度计入 `height`
    fn prefix_operand(&mut self, height: &mut usize) -> ParseResult<Expr> {
        let expr = self.prefix_expr()?;
        *height = (*height).max(self.height);
        Ok(expr)
    }

    fn check_group(&self) -> bool {
        self.check(TokenKind::Identifier) && self.peek().lexeme == "group"
    }
}
