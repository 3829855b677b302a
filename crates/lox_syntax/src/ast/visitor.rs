use super::*;

// 泛型 R: 返回值 (Result)
pub trait Visitor<R> {
    // 访问表达式
    fn visit_expr(&mut self, expr: &Expr) -> R;
}
