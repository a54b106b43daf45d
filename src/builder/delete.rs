//! DELETE statement builder.

use std::sync::Arc;

use crate::ast::builders::{col, star};
use crate::ast::clauses::{ClauseMap, DeletePosition};
use crate::ast::datasets::TypeInfo;
use crate::ast::expr::{Expr, TableExpr};
use crate::builder::alias::AliasTable;
use crate::compiler::{Compiler, CompileOptions, GenericCompiler};
use crate::error::BuildResult;

/// Fluent builder for DELETE statements.
///
/// A DELETE with no filter renders without WHERE and touches every row;
/// that is the caller's call to make.
#[derive(Clone)]
pub struct Delete {
    clauses: ClauseMap<DeletePosition>,
    aliases: AliasTable,
    compiler: Arc<dyn Compiler>,
}

impl Delete {
    pub(crate) fn of<T: 'static>() -> Self {
        let stmt = Self::empty();
        stmt.aliases.resolve(&TypeInfo::of::<T>());
        stmt.seed_from(TableExpr::of::<T>())
    }

    pub(crate) fn of_token(table: impl Into<String>) -> Self {
        Self::empty().seed_from(TableExpr::token(table))
    }

    fn empty() -> Self {
        Self {
            clauses: ClauseMap::new(),
            aliases: AliasTable::new(),
            compiler: GenericCompiler::shared(),
        }
    }

    fn seed_from(mut self, table: TableExpr) -> Self {
        self.clauses.add(Expr::Table(table), DeletePosition::From);
        self
    }

    /// Add a condition to the WHERE chain.
    pub fn filter(mut self, cond: impl Into<Expr>) -> Self {
        self.clauses.add(cond.into(), DeletePosition::Where);
        self
    }

    /// Set the RETURNING list to plain columns, replacing any earlier
    /// list.
    ///
    /// Panics if the list is empty.
    pub fn returning(mut self, cols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let items: Vec<Expr> = cols.into_iter().map(|name| col(&name.into())).collect();
        assert!(!items.is_empty(), "RETURNING list must not be empty");
        self.clauses.replace_or_add(
            DeletePosition::After,
            |e| matches!(e, Expr::Returning(_)),
            Expr::Returning(items),
        );
        self
    }

    /// RETURNING *.
    pub fn returning_all(mut self) -> Self {
        self.clauses.replace_or_add(
            DeletePosition::After,
            |e| matches!(e, Expr::Returning(_)),
            Expr::Returning(vec![star()]),
        );
        self
    }

    /// Add a node at an explicit clause position with order 0.
    pub fn add(mut self, expr: impl Into<Expr>, pos: DeletePosition) -> Self {
        self.clauses.add(expr.into(), pos);
        self
    }

    /// Add a node at an explicit clause position and order.
    pub fn add_ordered(mut self, expr: impl Into<Expr>, pos: DeletePosition, order: i32) -> Self {
        self.clauses.add_ordered(expr.into(), pos, order);
        self
    }

    /// Register an explicit alias for the dataset type `T`.
    pub fn alias_for<T: 'static>(self, alias: impl Into<String>) -> Self {
        self.aliases.set::<T>(alias);
        self
    }

    /// Swap in a different compiler.
    pub fn compiled_by(mut self, compiler: Arc<dyn Compiler>) -> Self {
        self.compiler = compiler;
        self
    }

    pub fn clauses(&self) -> &ClauseMap<DeletePosition> {
        &self.clauses
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Render to a string with default options.
    pub fn build(&self) -> BuildResult<String> {
        self.build_with(CompileOptions::NONE)
    }

    /// Render to a string with explicit options.
    pub fn build_with(&self, opts: CompileOptions) -> BuildResult<String> {
        let mut buf = String::new();
        self.build_into(&mut buf, opts)?;
        Ok(buf)
    }

    /// Render into a caller-supplied buffer.
    pub fn build_into(&self, buf: &mut String, opts: CompileOptions) -> BuildResult<()> {
        self.compile_into(buf, opts)?;
        opts.apply_tail(buf);
        Ok(())
    }

    pub(crate) fn compile_into(&self, buf: &mut String, opts: CompileOptions) -> BuildResult<()> {
        self.compiler.compile_delete(self, buf, opts)
    }
}

impl std::fmt::Debug for Delete {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Delete")
            .field("clauses", &self.clauses)
            .finish_non_exhaustive()
    }
}
