//! Extension methods on [`Expr`].

use crate::ast::conditions::FullCondition;
use crate::ast::expr::Expr;
use crate::ast::operators::{LogicOp, SortOrder};

/// Fluent helpers available on any expression.
pub trait ExprExt: Into<Expr> {
    /// Wrap with `AS alias`.
    fn aliased(self, alias: &str) -> Expr {
        assert!(!alias.is_empty(), "alias must not be empty");
        Expr::Aliased {
            expr: Box::new(self.into()),
            alias: alias.to_string(),
        }
    }

    /// Negate as a condition. Condition-like nodes flip their own flag;
    /// anything else is wrapped in a negated [`FullCondition`].
    fn negated(self) -> Expr {
        match self.into() {
            Expr::Compare(c) => Expr::Compare(c.not()),
            Expr::Group(g) => Expr::Group(g.not()),
            Expr::Full(f) => Expr::Full(f.not()),
            other => Expr::Full(FullCondition::new(other).not()),
        }
    }

    /// Set the trailing chain link to AND.
    fn and(self) -> Expr {
        with_link(self.into(), LogicOp::And)
    }

    /// Set the trailing chain link to OR.
    fn or(self) -> Expr {
        with_link(self.into(), LogicOp::Or)
    }

    /// Turn into an ORDER BY item.
    fn sorted(self, dir: SortOrder) -> Expr {
        Expr::Ordering {
            expr: Box::new(self.into()),
            dir,
        }
    }
}

impl<T: Into<Expr>> ExprExt for T {}

fn with_link(expr: Expr, link: LogicOp) -> Expr {
    match expr {
        Expr::Compare(mut c) => {
            c.link = Some(link);
            Expr::Compare(c)
        }
        Expr::Group(mut g) => {
            g.link = Some(link);
            Expr::Group(g)
        }
        Expr::Full(mut f) => {
            f.link = Some(link);
            Expr::Full(f)
        }
        other => {
            let mut f = FullCondition::new(other);
            f.link = Some(link);
            Expr::Full(f)
        }
    }
}
