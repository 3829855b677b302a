//! Binary Operation Evaluation
//!
//! 算术和比较要求数字；`+` 同时支持字符串拼接；相等比较适用于任意值；
//! 逗号丢弃左值

use lox_syntax::ast::BinaryOp;
use lox_syntax::Token;

use crate::error::{RuntimeError, RuntimeResult};
use crate::operators::{expect_number, expect_numbers, expect_string};
use crate::value::Value;

pub(super) fn eval_binary(
    op: BinaryOp,
    token: &Token,
    left: Value,
    right: Value,
) -> RuntimeResult<Value> {
    match op {
        BinaryOp::Comma => Ok(right),
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::Neq => Ok(Value::Bool(left != right)),
        BinaryOp::Add => eval_add(token, left, right),
        // 除以零遵循 IEEE-754，得到 ±inf 或 NaN
        BinaryOp::Sub => arithmetic(token, &left, &right, |l, r| l - r),
        BinaryOp::Mul => arithmetic(token, &left, &right, |l, r| l * r),
        BinaryOp::Div => arithmetic(token, &left, &right, |l, r| l / r),
        BinaryOp::Gt => comparison(token, &left, &right, |l, r| l > r),
        BinaryOp::Geq => comparison(token, &left, &right, |l, r| l >= r),
        BinaryOp::Lt => comparison(token, &left, &right, |l, r| l < r),
        BinaryOp::Leq => comparison(token, &left, &right, |l, r| l <= r),
    }
}

/// `+`：由左运算数的类型决定是拼接还是求和
fn eval_add(token: &Token, left: Value, right: Value) -> RuntimeResult<Value> {
    match left {
        Value::String(mut l) => {
            l.push_str(expect_string(token, &right)?);
            Ok(Value::String(l))
        }
        Value::Number(l) => Ok(Value::Number(l + expect_number(token, &right)?)),
        other => Err(RuntimeError::new(
            token,
            format!(
                "Expected two strings or two numbers but got {} + {}.",
                other, right
            ),
        )),
    }
}

fn arithmetic(
    token: &Token,
    left: &Value,
    right: &Value,
    apply: impl Fn(f64, f64) -> f64,
) -> RuntimeResult<Value> {
    let (l, r) = expect_numbers(token, left, right)?;
    Ok(Value::Number(apply(l, r)))
}

fn comparison(
    token: &Token,
    left: &Value,
    right: &Value,
    apply: impl Fn(f64, f64) -> bool,
) -> RuntimeResult<Value> {
    let (l, r) = expect_numbers(token, left, right)?;
    Ok(Value::Bool(apply(l, r)))
}
