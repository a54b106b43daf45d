//! CASE WHEN expression builder.
//!
//! The builder is split into two states so an unanswered WHEN cannot be
//! finished: [`case_when`] and [`CaseBuilder::when`] hand out a
//! [`CaseThen`], whose only move is [`CaseThen::then`]. ELSE and END are
//! only available once every branch is complete.

use crate::ast::expr::{CaseExpr, Expr};

/// Start a CASE expression with its first WHEN predicate.
///
/// Predicates are expressions: a condition from the builders, a
/// [`group`](super::group), or [`raw`](super::raw) SQL.
pub fn case_when(predicate: impl Into<Expr>) -> CaseThen {
    CaseThen {
        case: CaseExpr::default(),
        predicate: predicate.into(),
    }
}

/// A CASE builder with complete branches.
#[derive(Debug, Clone)]
pub struct CaseBuilder {
    case: CaseExpr,
}

impl CaseBuilder {
    /// Open another WHEN branch.
    pub fn when(self, predicate: impl Into<Expr>) -> CaseThen {
        CaseThen {
            case: self.case,
            predicate: predicate.into(),
        }
    }

    /// Close with an ELSE result.
    pub fn else_(mut self, result: impl Into<Expr>) -> Expr {
        self.case.default = Some(Box::new(result.into()));
        Expr::Case(self.case)
    }

    /// Close without an ELSE.
    pub fn end(self) -> Expr {
        Expr::Case(self.case)
    }
}

/// A CASE builder holding a WHEN predicate that still needs its THEN.
#[derive(Debug, Clone)]
pub struct CaseThen {
    case: CaseExpr,
    predicate: Expr,
}

impl CaseThen {
    /// Supply the result for the pending WHEN predicate.
    pub fn then(mut self, result: impl Into<Expr>) -> CaseBuilder {
        self.case.branches.push((self.predicate, result.into()));
        CaseBuilder { case: self.case }
    }
}
