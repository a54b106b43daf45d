//! Condition chain model.
//!
//! Conditions carry an optional trailing [`LogicOp`] that links them to the
//! next sibling in a chain; the final sibling's link is ignored when the
//! chain renders. Groups render their children in insertion order and can
//! be parenthesized and negated. An empty group renders to nothing.

use crate::ast::expr::Expr;
use crate::ast::operators::{LogicOp, Operator};

/// A single comparison: `left OP right`, optionally negated.
#[derive(Debug, Clone)]
pub struct Condition {
    pub left: Box<Expr>,
    pub op: Operator,
    /// Right operand. May be `None` only for operators that take no
    /// operand (IS NULL, IS NOT NULL); rendering any other operator
    /// without it fails.
    pub right: Option<Box<Expr>>,
    pub negated: bool,
    /// Link to the following sibling in a chain. Unset links default to
    /// AND when a following sibling exists.
    pub link: Option<LogicOp>,
}

impl Condition {
    pub fn new(left: Expr, op: Operator, right: Option<Expr>) -> Self {
        Self {
            left: Box::new(left),
            op,
            right: right.map(Box::new),
            negated: false,
            link: None,
        }
    }

    /// Negate this condition (renders with a leading NOT).
    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Link to the next sibling with AND.
    pub fn and(mut self) -> Self {
        self.link = Some(LogicOp::And);
        self
    }

    /// Link to the next sibling with OR.
    pub fn or(mut self) -> Self {
        self.link = Some(LogicOp::Or);
        self
    }
}

/// An ordered collection of conditions, groups, and other condition-like
/// expressions.
#[derive(Debug, Clone, Default)]
pub struct ConditionGroup {
    pub items: Vec<Expr>,
    /// Wrap the rendered children in parentheses.
    pub grouped: bool,
    pub negated: bool,
    pub link: Option<LogicOp>,
}

impl ConditionGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// A parenthesized group of the given items.
    pub fn of(items: impl IntoIterator<Item = impl Into<Expr>>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            grouped: true,
            negated: false,
            link: None,
        }
    }

    pub fn push(&mut self, item: impl Into<Expr>) {
        self.items.push(item.into());
    }

    /// True when the group holds nothing that can render.
    pub fn is_empty(&self) -> bool {
        self.items.iter().all(Expr::is_noop)
    }

    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    pub fn and(mut self) -> Self {
        self.link = Some(LogicOp::And);
        self
    }

    pub fn or(mut self) -> Self {
        self.link = Some(LogicOp::Or);
        self
    }
}

/// Wraps an arbitrary expression with condition semantics, so raw fragments
/// and subqueries can participate in chains.
#[derive(Debug, Clone)]
pub struct FullCondition {
    pub expr: Box<Expr>,
    pub negated: bool,
    pub link: Option<LogicOp>,
}

impl FullCondition {
    pub fn new(expr: Expr) -> Self {
        Self {
            expr: Box::new(expr),
            negated: false,
            link: None,
        }
    }

    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    pub fn and(mut self) -> Self {
        self.link = Some(LogicOp::And);
        self
    }

    pub fn or(mut self) -> Self {
        self.link = Some(LogicOp::Or);
        self
    }
}
