//! Parser Module
//!
//! 手写的递归下降解析器：
//! - `expr` - 优先级阶梯上的各条语法规则
//! - `prefix` - 读回 [`crate::ast::Printer`] 输出的前缀表示
//!
//! 错误处理采用 panic-mode：遇到第一个语法错误时报告一次，
//! 随后沿着 `Result` 一路返回，整个解析被放弃，不会暴露残缺的树。
//!
//! 嵌套层数和树高都有上限，过深的输入报告为语法错误，而不是耗尽栈。

mod expr;
mod prefix;


use crate::ast::Expr;
use crate::lexer::TokenKind;
use crate::token::Token;
use lox_diagnostics::{Diagnostic, Reporter};
use thiserror::Error;

/// 解析失败（具体原因已经通过 [`Reporter`] 报告）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("failed to parse")]
pub struct ParseFailure;

/// 内部展开信号，只在解析器内部传递
#[derive(Debug)]
pub(crate) struct ParseError;

pub(crate) type ParseResult<T> = Result<T, ParseError>;

/// 递归下降的嵌套层数上限（括号、一元运算符、条件分支）
const MAX_DEPTH: usize = 128;

/// 语法树高度上限；求值、打印和释放都沿树高递归
const MAX_HEIGHT: usize = 512;

/// 主入口：把词法单元序列解析为一个表达式
pub fn parse(tokens: &[Token], reporter: &mut dyn Reporter) -> Result<Expr, ParseFailure> {
    Parser::new(tokens, reporter).parse()
}

/// 读回前缀表示，例如 `(+ 1 (group 2))`
pub fn parse_prefix(tokens: &[Token], reporter: &mut dyn Reporter) -> Result<Expr, ParseFailure> {
    Parser::new(tokens, reporter).parse_prefix()
}

/// 解析器状态：词法单元序列上的游标
pub struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
    reporter: &'a mut dyn Reporter,
    /// 序列缺少结尾标记时使用
    end: Token,
    /// 当前嵌套层数
    depth: usize,
    /// 最近解析出的子树高度
    height: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], reporter: &'a mut dyn Reporter) -> Self {
        let end = match tokens.last() {
            Some(last) => Token::eof(last.line, last.span.end),
            None => Token::eof(1, 0),
        };
        Self {
            tokens,
            current: 0,
            reporter,
            end,
            depth: 0,
            height: 0,
        }
    }

    /// 解析一个完整的表达式
    pub fn parse(mut self) -> Result<Expr, ParseFailure> {
        self.expression().map_err(|_| ParseFailure)
    }

    /// 解析前缀表示
    pub fn parse_prefix(mut self) -> Result<Expr, ParseFailure> {
        self.prefix_expr().map_err(|_| ParseFailure)
    }

    /// 丢弃词法单元直到语句边界：刚越过 `;`，或下一个词法单元开启新语句
    pub fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }
            if self.peek().kind.starts_statement() {
                return;
            }
            self.advance();
        }
    }

    // ============ 游标基础设施 ============

    /// 当前词法单元属于给定类别之一时前进
    fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|kind| self.check(*kind)) {
            self.advance();
            return true;
        }
        false
    }

    /// 在 (类别, 运算符) 表中查找当前词法单元，命中则前进并返回运算符
    fn match_operator<Op: Copy>(&mut self, operators: &[(TokenKind, Op)]) -> Option<Op> {
        let op = operators
            .iter()
            .find(|(kind, _)| self.check(*kind))
            .map(|(_, op)| *op)?;
        self.advance();
        Some(op)
    }

    fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.current).unwrap_or(&self.end)
    }

    fn previous(&self) -> &Token {
        match self.current.checked_sub(1) {
            Some(index) => &self.tokens[index],
            None => self.peek(),
        }
    }

    /// 要求当前词法单元属于 `kind`，否则报告 `message` 并展开
    fn consume(&mut self, kind: TokenKind, message: &str) -> ParseResult<Token> {
        if self.check(kind) {
            return Ok(self.advance().clone());
        }
        Err(self.error_at_current(message))
    }

    /// 进入一层嵌套，超过 `limit` 时报告错误
    fn descend(&mut self, limit: usize) -> ParseResult<()> {
        if self.depth >= limit {
            return Err(self.error_at_current("Too much nesting."));
        }
        self.depth += 1;
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    /// 记录刚构造的节点高度，超过上限时在 `token` 处报告错误
    fn grow(&mut self, token: &Token, height: usize) -> ParseResult<()> {
        if height > MAX_HEIGHT {
            return Err(self.error(token, "Too much nesting."));
        }
        self.height = height;
        Ok(())
    }

    fn error_at_current(&mut self, message: &str) -> ParseError {
        let token = self.peek().clone();
        self.error(&token, message)
    }

    fn error(&mut self, token: &Token, message: &str) -> ParseError {
        self.reporter.add(
            Diagnostic::syntax(token.line, message)
                .at(token.location())
                .span(token.span.clone()),
        );
        ParseError
    }
}
