//! Literal and parameter builders.

use crate::ast::expr::Expr;
use crate::ast::values::Value;

/// Create a literal value expression.
pub fn val(v: impl Into<Value>) -> Expr {
    Expr::Value(v.into())
}

/// The NULL literal.
pub fn null() -> Expr {
    Expr::Value(Value::Null)
}

/// A positional parameter placeholder ($1, $2, ...).
pub fn param(n: usize) -> Expr {
    Expr::Value(Value::Param(n))
}

/// A named parameter placeholder (:name).
pub fn named_param(name: &str) -> Expr {
    Expr::Value(Value::NamedParam(name.to_string()))
}
