//! Runtime Values
//!
//! 动态类型的运行时值。运算总是产生新值，不会原地修改。

use lox_syntax::ast::Literal;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    String(String),
    Bool(bool),
    Nil,
}

impl Value {
    /// `nil` 和 `false` 为假，其余（包括 0 和空字符串）为真
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Number(n) => Value::Number(*n),
            Literal::String(s) => Value::String(s.clone()),
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Nil => Value::Nil,
        }
    }
}

/// 数字固定保留六位小数，字符串原样输出
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{:.6}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Nil => write!(f, "nil"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Number(0.0).is_truthy());
        assert!(Value::String(String::new()).is_truthy());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Number(7.0).to_string(), "7.000000");
        assert_eq!(Value::Number(-0.5).to_string(), "-0.500000");
        assert_eq!(Value::String("ab".to_string()).to_string(), "ab");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Nil.to_string(), "nil");
    }

    #[test]
    fn test_equality_is_type_sensitive() {
        assert_ne!(Value::Number(0.0), Value::Bool(false));
        assert_ne!(Value::Number(1.0), Value::String("1".to_string()));
        assert_eq!(Value::Nil, Value::Nil);
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    }

    #[test]
    fn test_from_literal() {
        assert_eq!(Value::from(&Literal::Number(2.5)), Value::Number(2.5));
        assert_eq!(Value::from(&Literal::Nil), Value::Nil);
    }
}
