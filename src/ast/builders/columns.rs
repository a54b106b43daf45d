//! Column reference builders.

use crate::ast::datasets::Dataset;
use crate::ast::expr::{ColumnExpr, Expr};

/// Create an unqualified column reference.
///
/// Panics if the name is empty.
pub fn col(name: &str) -> Expr {
    assert!(!name.is_empty(), "column name must not be empty");
    Expr::Column(ColumnExpr {
        dataset: None,
        name: name.to_string(),
    })
}

/// Create a column reference qualified by the dataset type `T`.
/// Renders as `alias.name` through the statement's alias table.
///
/// Panics if the name is empty.
pub fn tcol<T: 'static>(name: &str) -> Expr {
    assert!(!name.is_empty(), "column name must not be empty");
    Expr::Column(ColumnExpr {
        dataset: Some(Dataset::of::<T>()),
        name: name.to_string(),
    })
}

/// Create a column reference qualified by a literal dataset token.
pub fn qcol(table: &str, name: &str) -> Expr {
    assert!(!name.is_empty(), "column name must not be empty");
    assert!(!table.is_empty(), "table token must not be empty");
    Expr::Column(ColumnExpr {
        dataset: Some(Dataset::token(table)),
        name: name.to_string(),
    })
}

/// The star selector `*`.
pub fn star() -> Expr {
    Expr::Column(ColumnExpr {
        dataset: None,
        name: "*".to_string(),
    })
}
