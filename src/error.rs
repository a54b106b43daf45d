//! Error types for sqlcraft.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A node is structurally unfinished, e.g. a binary comparison whose
    /// right-hand side was never supplied.
    #[error("Incomplete expression: missing {field} in {context}")]
    IncompleteExpression {
        field: &'static str,
        context: &'static str,
    },

    /// A type expression was rendered without a type converter registered
    /// on the compiler.
    #[error("No SQL type converter registered; supply one with `with_type_converter`")]
    MissingTypeConverter,
}

impl BuildError {
    /// Create an incomplete-expression error.
    pub fn incomplete(field: &'static str, context: &'static str) -> Self {
        Self::IncompleteExpression { field, context }
    }
}

/// Result type alias for build operations.
pub type BuildResult<T> = Result<T, BuildError>;
