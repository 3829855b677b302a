//! Unary Operation Evaluation

use lox_syntax::ast::UnaryOp;
use lox_syntax::Token;

use crate::error::RuntimeResult;
use crate::operators::expect_number;
use crate::value::Value;

pub(super) fn eval_unary(op: UnaryOp, token: &Token, right: Value) -> RuntimeResult<Value> {
    match op {
        UnaryOp::Neg => Ok(Value::Number(-expect_number(token, &right)?)),
        UnaryOp::Not => Ok(Value::Bool(!right.is_truthy())),
    }
}
