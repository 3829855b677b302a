use crate::lexer::TokenKind;
use crate::token::Token;
use std::fmt;

/// 表达式树
///
/// 每个子节点由父节点独占（`Box`），树无环且构造后不再修改。
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // 字面量: 1, "hello", true, nil
    Literal(Literal),

    // 括号分组: (a + b)
    Grouping(Box<Expr>),

    // 一元操作: -a, !b
    Unary {
        op: UnaryOp,
        token: Token,
        right: Box<Expr>,
    },

    // 二元操作: a + b, a == b, a, b
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        token: Token,
        right: Box<Expr>,
    },

    // 条件表达式: cond ? a : b (右结合)
    Ternary {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
}

impl Expr {
    pub fn grouping(inner: Expr) -> Self {
        Self::Grouping(Box::new(inner))
    }

    pub fn unary(op: UnaryOp, token: Token, right: Expr) -> Self {
        Self::Unary {
            op,
            token,
            right: Box::new(right),
        }
    }

    pub fn binary(left: Expr, op: BinaryOp, token: Token, right: Expr) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            token,
            right: Box::new(right),
        }
    }

    pub fn ternary(condition: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Self::Ternary {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    String(String),
    Bool(bool),
    Nil,
}

/// 前缀表示中的字面量写法，能被词法分析器重新读回
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::String(s) => write!(f, "\"{}\"", s),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Nil => write!(f, "nil"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Comma, // ,
    Eq,
    Neq, // ==, !=
    Gt,
    Geq,
    Lt,
    Leq, // >, >=, <, <=
    Add,
    Sub,
    Mul,
    Div, // +, -, *, /
}

impl BinaryOp {
    /// 运算符的源码写法
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Comma => ",",
            Self::Eq => "==",
            Self::Neq => "!=",
            Self::Gt => ">",
            Self::Geq => ">=",
            Self::Lt => "<",
            Self::Leq => "<=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    pub fn from_token(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::Comma => Self::Comma,
            TokenKind::EqualEqual => Self::Eq,
            TokenKind::BangEqual => Self::Neq,
            TokenKind::Greater => Self::Gt,
            TokenKind::GreaterEqual => Self::Geq,
            TokenKind::Less => Self::Lt,
            TokenKind::LessEqual => Self::Leq,
            TokenKind::Plus => Self::Add,
            TokenKind::Minus => Self::Sub,
            TokenKind::Star => Self::Mul,
            TokenKind::Slash => Self::Div,
            _ => return None,
        };
        Some(op)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg, // -x
    Not, // !x
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "!",
        }
    }
}
