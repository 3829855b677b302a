//! 运算数检查
//!
//! 所有运算符共用的类型断言，类型强制规则集中在这里

use crate::error::{RuntimeError, RuntimeResult};
use crate::value::Value;
use lox_syntax::Token;

/// 要求运算数为数字
pub(crate) fn expect_number(operator: &Token, value: &Value) -> RuntimeResult<f64> {
    match value {
        Value::Number(n) => Ok(*n),
        _ => Err(RuntimeError::new(operator, "Operand must be a number.")),
    }
}

/// 要求两个运算数都为数字，先检查左边
pub(crate) fn expect_numbers(operator: &Token, left: &Value, right: &Value) -> RuntimeResult<(f64, f64)> {
    let left = expect_number(operator, left)?;
    let right = expect_number(operator, right)?;
    Ok((left, right))
}

/// 要求运算数为字符串
pub(crate) fn expect_string<'v>(operator: &Token, value: &'v Value) -> RuntimeResult<&'v str> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(RuntimeError::new(operator, "Operand must be a string.")),
    }
}
