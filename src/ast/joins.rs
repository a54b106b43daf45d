use crate::ast::conditions::ConditionGroup;
use crate::ast::expr::TableExpr;
use crate::ast::operators::JoinKind;

/// A join clause: kind, target dataset, and the ON conditions.
///
/// CROSS joins carry an empty group and render without ON.
#[derive(Debug, Clone)]
pub struct JoinExpr {
    pub kind: JoinKind,
    pub target: TableExpr,
    pub on: ConditionGroup,
}

impl JoinExpr {
    pub fn new(kind: JoinKind, target: TableExpr, on: ConditionGroup) -> Self {
        Self { kind, target, on }
    }
}
