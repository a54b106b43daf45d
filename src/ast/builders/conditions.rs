//! Condition builders for WHERE, HAVING, and ON clauses.

use crate::ast::builders::columns::col;
use crate::ast::conditions::{Condition, ConditionGroup, FullCondition};
use crate::ast::expr::Expr;
use crate::ast::operators::Operator;
use crate::ast::values::Value;
use crate::builder::Select;

/// Helper to create a column-vs-value condition.
fn make_condition(column: &str, op: Operator, value: Value) -> Condition {
    Condition::new(col(column), op, Some(Expr::Value(value)))
}

/// Create a condition with arbitrary expressions on both sides.
pub fn cmp(left: impl Into<Expr>, op: Operator, right: impl Into<Expr>) -> Condition {
    Condition::new(left.into(), op, Some(right.into()))
}

/// Create an equality condition (column = value)
pub fn eq(column: &str, value: impl Into<Value>) -> Condition {
    make_condition(column, Operator::Eq, value.into())
}

/// Create a not-equal condition (column != value)
pub fn ne(column: &str, value: impl Into<Value>) -> Condition {
    make_condition(column, Operator::Ne, value.into())
}

/// Create a greater-than condition (column > value)
pub fn gt(column: &str, value: impl Into<Value>) -> Condition {
    make_condition(column, Operator::Gt, value.into())
}

/// Create a greater-than-or-equal condition (column >= value)
pub fn gte(column: &str, value: impl Into<Value>) -> Condition {
    make_condition(column, Operator::Gte, value.into())
}

/// Create a less-than condition (column < value)
pub fn lt(column: &str, value: impl Into<Value>) -> Condition {
    make_condition(column, Operator::Lt, value.into())
}

/// Create a less-than-or-equal condition (column <= value)
pub fn lte(column: &str, value: impl Into<Value>) -> Condition {
    make_condition(column, Operator::Lte, value.into())
}

/// Create a LIKE condition (column LIKE pattern)
pub fn like(column: &str, pattern: &str) -> Condition {
    make_condition(column, Operator::Like, Value::Text(pattern.to_string()))
}

/// Create a NOT LIKE condition
pub fn not_like(column: &str, pattern: &str) -> Condition {
    make_condition(column, Operator::NotLike, Value::Text(pattern.to_string()))
}

/// Create an ILIKE condition (case-insensitive LIKE)
pub fn ilike(column: &str, pattern: &str) -> Condition {
    make_condition(column, Operator::ILike, Value::Text(pattern.to_string()))
}

/// Create an IN condition (column IN (values))
///
/// Panics if the value list is empty.
pub fn is_in<V: Into<Value>>(column: &str, values: impl IntoIterator<Item = V>) -> Condition {
    let vals: Vec<Expr> = values.into_iter().map(|v| Expr::Value(v.into())).collect();
    assert!(!vals.is_empty(), "IN list must not be empty");
    Condition::new(col(column), Operator::In, Some(Expr::Row(vals)))
}

/// Create a NOT IN condition (column NOT IN (values))
///
/// Panics if the value list is empty.
pub fn not_in<V: Into<Value>>(column: &str, values: impl IntoIterator<Item = V>) -> Condition {
    let vals: Vec<Expr> = values.into_iter().map(|v| Expr::Value(v.into())).collect();
    assert!(!vals.is_empty(), "NOT IN list must not be empty");
    Condition::new(col(column), Operator::NotIn, Some(Expr::Row(vals)))
}

/// Create an IS NULL condition
pub fn is_null(column: &str) -> Condition {
    Condition::new(col(column), Operator::IsNull, None)
}

/// Create an IS NOT NULL condition
pub fn is_not_null(column: &str) -> Condition {
    Condition::new(col(column), Operator::IsNotNull, None)
}

/// Create a BETWEEN condition (column BETWEEN low AND high)
pub fn between(column: &str, low: impl Into<Value>, high: impl Into<Value>) -> Condition {
    let bounds = Expr::Row(vec![Expr::Value(low.into()), Expr::Value(high.into())]);
    Condition::new(col(column), Operator::Between, Some(bounds))
}

/// Create a NOT BETWEEN condition
pub fn not_between(column: &str, low: impl Into<Value>, high: impl Into<Value>) -> Condition {
    let bounds = Expr::Row(vec![Expr::Value(low.into()), Expr::Value(high.into())]);
    Condition::new(col(column), Operator::NotBetween, Some(bounds))
}

/// Create an EXISTS (subquery) condition
pub fn exists(query: Select) -> Condition {
    Condition::new(Expr::NoOp, Operator::Exists, Some(query.into()))
}

/// Create a NOT EXISTS (subquery) condition
pub fn not_exists(query: Select) -> Condition {
    Condition::new(Expr::NoOp, Operator::NotExists, Some(query.into()))
}

/// Create a parenthesized condition group from the given items.
/// Items chain with their trailing links; unset links default to AND.
pub fn group(items: impl IntoIterator<Item = impl Into<Expr>>) -> ConditionGroup {
    ConditionGroup::of(items)
}

/// Wrap a raw SQL fragment as a condition so it can participate in chains.
pub fn raw_cond(sql: impl Into<String>) -> FullCondition {
    FullCondition::new(Expr::Raw(sql.into()))
}
