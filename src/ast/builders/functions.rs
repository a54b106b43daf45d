//! Function call, cast, and raw fragment builders.

use crate::ast::expr::{Expr, TypeExpr};

/// Create a function call expression, e.g. `func("COALESCE", [col("a"), val(0)])`.
pub fn func(name: &str, args: impl IntoIterator<Item = impl Into<Expr>>) -> Expr {
    assert!(!name.is_empty(), "function name must not be empty");
    Expr::FunctionCall {
        name: name.to_string(),
        args: args.into_iter().map(Into::into).collect(),
    }
}

/// Create a CAST expression. The target type resolves through the
/// compiler's type converter.
pub fn cast(expr: impl Into<Expr>, target: TypeExpr) -> Expr {
    Expr::Cast {
        expr: Box::new(expr.into()),
        target,
    }
}

/// A SQL type reference keyed by the Rust type `T`.
pub fn sql_type<T: 'static>() -> TypeExpr {
    TypeExpr::of::<T>()
}

/// A SQL type reference with a length argument, e.g. VARCHAR(80).
pub fn sql_type_len<T: 'static>(len: u32) -> TypeExpr {
    TypeExpr::of::<T>().with_len(len)
}

/// A raw SQL fragment, emitted verbatim.
pub fn raw(sql: impl Into<String>) -> Expr {
    Expr::Raw(sql.into())
}
