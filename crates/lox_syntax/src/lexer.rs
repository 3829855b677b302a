//! Lexer - 词法分析
//!
//! 基于 logos 的状态机，把源码切分为 [`Token`] 序列。
//! 词法错误通过 [`Reporter`] 报告，扫描不会中止。

use crate::ast::Literal;
use crate::token::Token;
use logos::{Lexer, Logos, Skip};
use lox_diagnostics::{Diagnostic, Reporter};
use thiserror::Error;

/// 词法错误
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub enum LexError {
    /// 无法识别的字符
    #[default]
    #[error("Unexpected character.")]
    UnexpectedCharacter,

    /// 字符串缺少结尾引号
    #[error("Unterminated string.")]
    UnterminatedString,
}

/// 扫描过程中的行号状态
#[derive(Debug, Clone, Copy)]
pub struct LineCounter {
    pub line: usize,
}

impl Default for LineCounter {
    fn default() -> Self {
        Self { line: 1 }
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(error = LexError)]
#[logos(extras = LineCounter)]
#[logos(skip r"[ \t\r]+")]
pub enum TokenKind {
    // --- 单字符符号 ---
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token(";")]
    Semicolon,
    #[token("/")]
    Slash,
    #[token("*")]
    Star,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,

    // --- 一或两个字符的符号 ---
    #[token("!")]
    Bang,
    #[token("!=")]
    BangEqual,
    #[token("=")]
    Equal,
    #[token("==")]
    EqualEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,

    // --- 字面量 ---
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    // 字符串可以跨行，内部空白原样保留
    #[token("\"", lex_string)]
    String,
    #[regex(r"[0-9]+", lex_fraction)]
    Number,

    // --- 关键字 ---
    #[token("and")]
    And,
    #[token("class")]
    Class,
    #[token("else")]
    Else,
    #[token("false")]
    False,
    #[token("for")]
    For,
    #[token("fun")]
    Fun,
    #[token("if")]
    If,
    #[token("nil")]
    Nil,
    #[token("or")]
    Or,
    #[token("print")]
    Print,
    #[token("return")]
    Return,
    #[token("super")]
    Super,
    #[token("this")]
    This,
    #[token("true")]
    True,
    #[token("var")]
    Var,
    #[token("while")]
    While,

    #[token("\n", newline)]
    Newline,

    #[regex(r"//[^\n]*", logos::skip)]
    Comment,

    Eof,
}

impl TokenKind {
    /// 是否为开启新语句的关键字（用于错误恢复）
    pub fn starts_statement(&self) -> bool {
        matches!(
            self,
            Self::Class
                | Self::Fun
                | Self::Var
                | Self::For
                | Self::If
                | Self::While
                | Self::Print
                | Self::Return
        )
    }
}

fn newline(lex: &mut Lexer<TokenKind>) -> Skip {
    lex.extras.line += 1;
    Skip
}

/// 扫描到下一个 `"` 为止；到达输入末尾则报告未结束的字符串
fn lex_string(lex: &mut Lexer<TokenKind>) -> Result<(), LexError> {
    let rest = lex.remainder();
    let (body_len, terminated) = match rest.find('"') {
        Some(end) => (end, true),
        None => (rest.len(), false),
    };

    lex.extras.line += rest[..body_len].matches('\n').count();

    if terminated {
        lex.bump(body_len + 1);
        Ok(())
    } else {
        lex.bump(body_len);
        Err(LexError::UnterminatedString)
    }
}

/// 小数部分：`.` 后至少跟一位数字才会被吞入，`1.` 中的点留给下一个词法单元
fn lex_fraction(lex: &mut Lexer<TokenKind>) {
    let rest = lex.remainder().as_bytes();
    if rest.len() >= 2 && rest[0] == b'.' && rest[1].is_ascii_digit() {
        let digits = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        lex.bump(1 + digits);
    }
}

/// 扫描整个源码，总是以 [`TokenKind::Eof`] 结尾
pub fn scan(source: &str, reporter: &mut dyn Reporter) -> Vec<Token> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        let span = lexer.span();

        match result {
            Ok(kind) => tokens.push(make_token(kind, lexer.slice(), line, span)),
            Err(err) => reporter.add(Diagnostic::lexical(line, err.to_string()).span(span)),
        }
    }

    tokens.push(Token::eof(lexer.extras.line, source.len()));
    tokens
}

fn make_token(kind: TokenKind, lexeme: &str, line: usize, span: lox_diagnostics::Span) -> Token {
    let token = Token::new(kind, lexeme, line, span);
    match kind {
        TokenKind::Number => token.with_literal(Literal::Number(parse_number(lexeme))),
        TokenKind::String => {
            let value = &lexeme[1..lexeme.len() - 1];
            token.with_literal(Literal::String(value.to_string()))
        }
        _ => token,
    }
}

/// 数字的语法只允许 ASCII 数字和一个小数点，转换失败说明词法规则本身有缺陷
fn parse_number(lexeme: &str) -> f64 {
    match lexeme.parse() {
        Ok(value) => value,
        Err(err) => panic!("number literal '{}' accepted by the lexer but not convertible: {}", lexeme, err),
    }
}
