//! Expression Parser
//!
//! 优先级从低到高：逗号 → 条件 → 相等 → 比较 → 加减 → 乘除 → 一元 → 基本表达式

use super::{ParseResult, Parser, MAX_DEPTH};
use crate::ast::{BinaryOp, Expr, Literal, UnaryOp};
use crate::lexer::TokenKind;

const EQUALITY: &[(TokenKind, BinaryOp)] = &[
    (TokenKind::EqualEqual, BinaryOp::Eq),
    (TokenKind::BangEqual, BinaryOp::Neq),
];

const COMPARISON: &[(TokenKind, BinaryOp)] = &[
    (TokenKind::Greater, BinaryOp::Gt),
    (TokenKind::GreaterEqual, BinaryOp::Geq),
    (TokenKind::Less, BinaryOp::Lt),
    (TokenKind::LessEqual, BinaryOp::Leq),
];

const ADDITION: &[(TokenKind, BinaryOp)] = &[
    (TokenKind::Minus, BinaryOp::Sub),
    (TokenKind::Plus, BinaryOp::Add),
];

const MULTIPLICATION: &[(TokenKind, BinaryOp)] = &[
    (TokenKind::Star, BinaryOp::Mul),
    (TokenKind::Slash, BinaryOp::Div),
];

const UNARY: &[(TokenKind, UnaryOp)] = &[
    (TokenKind::Bang, UnaryOp::Not),
    (TokenKind::Minus, UnaryOp::Neg),
];

impl<'a> Parser<'a> {
    /// expression → comma
    pub(super) fn expression(&mut self) -> ParseResult<Expr> {
        self.comma()
    }

    /// comma → ternary ( "," ternary )*
    fn comma(&mut self) -> ParseResult<Expr> {
        self.left_assoc(&[(TokenKind::Comma, BinaryOp::Comma)], Self::ternary)
    }

    /// ternary → equality ( "?" expression ":" expression )?
    ///
    /// 两个分支都回到 `expression`，因此 `a ? b : c ? d : e` 是右结合的
    fn ternary(&mut self) -> ParseResult<Expr> {
        let condition = self.equality()?;
        let mut height = self.height;

        if !self.match_any(&[TokenKind::Question]) {
            return Ok(condition);
        }
        let question = self.previous().clone();

        self.descend(MAX_DEPTH)?;
        let then_branch = self.expression()?;
        height = height.max(self.height);
        self.consume(
            TokenKind::Colon,
            "Expect ':' after then branch of conditional expression.",
        )?;
        let else_branch = self.expression()?;
        height = height.max(self.height);
        self.ascend();

        self.grow(&question, height + 1)?;
        Ok(Expr::ternary(condition, then_branch, else_branch))
    }

    fn equality(&mut self) -> ParseResult<Expr> {
        self.left_assoc(EQUALITY, Self::comparison)
    }

    fn comparison(&mut self) -> ParseResult<Expr> {
        self.left_assoc(COMPARISON, Self::addition)
    }

    fn addition(&mut self) -> ParseResult<Expr> {
        self.left_assoc(ADDITION, Self::multiplication)
    }

    fn multiplication(&mut self) -> ParseResult<Expr> {
        self.left_assoc(MULTIPLICATION, Self::unary)
    }

    /// unary → ( "!" | "-" ) unary | primary
    fn unary(&mut self) -> ParseResult<Expr> {
        if let Some(op) = self.match_operator(UNARY) {
            let token = self.previous().clone();
            self.descend(MAX_DEPTH)?;
            let right = self.unary()?;
            self.ascend();

            let height = self.height + 1;
            self.grow(&token, height)?;
            return Ok(Expr::unary(op, token, right));
        }
        self.primary()
    }

    /// primary → NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")"
    fn primary(&mut self) -> ParseResult<Expr> {
        if let Some(literal) = self.literal()? {
            return Ok(literal);
        }

        if self.match_any(&[TokenKind::LeftParen]) {
            let paren = self.previous().clone();
            self.descend(MAX_DEPTH)?;
            let inner = self.expression()?;
            self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
            self.ascend();

            let height = self.height + 1;
            self.grow(&paren, height)?;
            return Ok(Expr::grouping(inner));
        }

        Err(self.error_at_current("Expect expression."))
    }

    /// 左结合的二元层级：operand ( op operand )*，从左到右折叠
    ///
    /// 折叠不加深递归，但每次都让左侧的树长高一层
    fn left_assoc(
        &mut self,
        operators: &[(TokenKind, BinaryOp)],
        operand: fn(&mut Self) -> ParseResult<Expr>,
    ) -> ParseResult<Expr> {
        let mut expr = operand(self)?;
        let mut height = self.height;

        while let Some(op) = self.match_operator(operators) {
            let token = self.previous().clone();
            let right = operand(self)?;
            height = height.max(self.height) + 1;
            self.grow(&token, height)?;
            expr = Expr::binary(expr, op, token, right);
        }

        Ok(expr)
    }

    /// 字面量；当前词法单元不是字面量时返回 `None` 且不前进
    pub(super) fn literal(&mut self) -> ParseResult<Option<Expr>> {
        let literal = if self.match_any(&[TokenKind::False]) {
            Literal::Bool(false)
        } else if self.match_any(&[TokenKind::True]) {
            Literal::Bool(true)
        } else if self.match_any(&[TokenKind::Nil]) {
            Literal::Nil
        } else if self.match_any(&[TokenKind::Number, TokenKind::String]) {
            let token = self.previous().clone();
            match token.literal.clone() {
                Some(value) => value,
                None => return Err(self.error(&token, "Expect literal value.")),
            }
        } else {
            return Ok(None);
        };

        self.height = 1;
        Ok(Some(Expr::Literal(literal)))
    }
}
