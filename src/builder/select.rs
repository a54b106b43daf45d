//! SELECT statement builder.

use std::sync::Arc;

use crate::ast::builders::col;
use crate::ast::clauses::{ClauseMap, SelectPosition};
use crate::ast::conditions::ConditionGroup;
use crate::ast::datasets::{Dataset, TypeInfo};
use crate::ast::expr::{Expr, TableExpr};
use crate::ast::joins::JoinExpr;
use crate::ast::operators::{JoinKind, SortOrder};
use crate::builder::alias::AliasTable;
use crate::compiler::{Compiler, CompileOptions, GenericCompiler};
use crate::error::BuildResult;

/// Fluent builder for SELECT statements.
///
/// Verbs may run in any order; the clause map renders them canonically.
/// `build` borrows the statement, so one builder can be compiled many
/// times and always yields identical text.
#[derive(Clone)]
pub struct Select {
    clauses: ClauseMap<SelectPosition>,
    aliases: AliasTable,
    compiler: Arc<dyn Compiler>,
    distinct: bool,
}

impl Select {
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
            distinct: false,
        }
    }

    fn seed_from(mut self, table: TableExpr) -> Self {
        self.clauses.add(Expr::Table(table), SelectPosition::From);
        self
    }

    /// Render with SELECT DISTINCT.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Add one column expression to the select list.
    pub fn column(mut self, expr: impl Into<Expr>) -> Self {
        self.clauses.add(expr.into(), SelectPosition::Columns);
        self
    }

    /// Add plain column references to the select list.
    ///
    /// Panics if the list is empty.
    pub fn columns(mut self, cols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut any = false;
        for name in cols {
            self.clauses.add(col(&name.into()), SelectPosition::Columns);
            any = true;
        }
        assert!(any, "column list must not be empty");
        self
    }

    /// Add another FROM source keyed by type.
    pub fn from<U: 'static>(mut self) -> Self {
        self.aliases.resolve(&TypeInfo::of::<U>());
        self.clauses
            .add(Expr::Table(TableExpr::of::<U>()), SelectPosition::From);
        self
    }

    /// Add another FROM source by literal name (CTEs, ad-hoc tables).
    pub fn from_token(mut self, table: impl Into<String>) -> Self {
        self.clauses
            .add(Expr::Table(TableExpr::token(table)), SelectPosition::From);
        self
    }

    /// Add a condition to the WHERE chain. Siblings link with their
    /// trailing operator; unset links default to AND.
    pub fn filter(mut self, cond: impl Into<Expr>) -> Self {
        self.clauses.add(cond.into(), SelectPosition::Where);
        self
    }

    /// Add a condition to the HAVING chain.
    pub fn having(mut self, cond: impl Into<Expr>) -> Self {
        self.clauses.add(cond.into(), SelectPosition::Having);
        self
    }

    /// Add a plain column to GROUP BY.
    pub fn group_by(mut self, column: &str) -> Self {
        self.clauses.add(col(column), SelectPosition::GroupBy);
        self
    }

    /// Add an arbitrary expression to GROUP BY.
    pub fn group_by_expr(mut self, expr: impl Into<Expr>) -> Self {
        self.clauses.add(expr.into(), SelectPosition::GroupBy);
        self
    }

    /// Add an ORDER BY item on a plain column.
    pub fn order_by(mut self, column: &str, dir: SortOrder) -> Self {
        self.clauses.add(
            Expr::Ordering {
                expr: Box::new(col(column)),
                dir,
            },
            SelectPosition::OrderBy,
        );
        self
    }

    /// ORDER BY column ASC.
    pub fn order_asc(self, column: &str) -> Self {
        self.order_by(column, SortOrder::Asc)
    }

    /// ORDER BY column DESC.
    pub fn order_desc(self, column: &str) -> Self {
        self.order_by(column, SortOrder::Desc)
    }

    /// Add an ORDER BY item on an arbitrary expression.
    pub fn order_by_expr(mut self, expr: impl Into<Expr>, dir: SortOrder) -> Self {
        self.clauses.add(
            Expr::Ordering {
                expr: Box::new(expr.into()),
                dir,
            },
            SelectPosition::OrderBy,
        );
        self
    }

    /// Open a join sub-builder against the dataset type `U`. The join is
    /// registered once `on` completes it.
    pub fn join<U: 'static>(self, kind: JoinKind) -> JoinBuilder {
        self.aliases.resolve(&TypeInfo::of::<U>());
        JoinBuilder {
            stmt: self,
            kind,
            target: TableExpr::of::<U>(),
        }
    }

    /// Open a join sub-builder against a literal dataset name.
    pub fn join_token(self, kind: JoinKind, table: impl Into<String>) -> JoinBuilder {
        JoinBuilder {
            stmt: self,
            kind,
            target: TableExpr::token(table),
        }
    }

    /// INNER JOIN against `U`.
    pub fn inner_join<U: 'static>(self) -> JoinBuilder {
        self.join::<U>(JoinKind::Inner)
    }

    /// LEFT JOIN against `U`.
    pub fn left_join<U: 'static>(self) -> JoinBuilder {
        self.join::<U>(JoinKind::Left)
    }

    /// RIGHT JOIN against `U`.
    pub fn right_join<U: 'static>(self) -> JoinBuilder {
        self.join::<U>(JoinKind::Right)
    }

    /// CROSS JOIN against `U`; registers immediately, no ON clause.
    pub fn cross_join<U: 'static>(mut self) -> Self {
        self.aliases.resolve(&TypeInfo::of::<U>());
        self.clauses.add(
            Expr::Join(JoinExpr::new(
                JoinKind::Cross,
                TableExpr::of::<U>(),
                ConditionGroup::new(),
            )),
            SelectPosition::Join,
        );
        self
    }

    /// Set LIMIT, replacing any earlier value.
    pub fn limit(mut self, n: u64) -> Self {
        self.clauses.replace_or_add(
            SelectPosition::After,
            |e| matches!(e, Expr::Limit(_)),
            Expr::Limit(n),
        );
        self
    }

    /// Set OFFSET, replacing any earlier value.
    pub fn offset(mut self, n: u64) -> Self {
        self.clauses.replace_or_add(
            SelectPosition::After,
            |e| matches!(e, Expr::Offset(_)),
            Expr::Offset(n),
        );
        self
    }

    /// Append FOR UPDATE. Idempotent.
    pub fn for_update(mut self) -> Self {
        if !self
            .clauses
            .contains(SelectPosition::After, |e| matches!(e, Expr::ForUpdate))
        {
            self.clauses.add(Expr::ForUpdate, SelectPosition::After);
        }
        self
    }

    /// Append UNION with another query.
    pub fn union(mut self, query: Select) -> Self {
        self.clauses.add(
            Expr::Union {
                all: false,
                query: Box::new(query),
            },
            SelectPosition::After,
        );
        self
    }

    /// Append UNION ALL with another query.
    pub fn union_all(mut self, query: Select) -> Self {
        self.clauses.add(
            Expr::Union {
                all: true,
                query: Box::new(query),
            },
            SelectPosition::After,
        );
        self
    }

    /// Add a node at an explicit clause position with order 0.
    pub fn add(mut self, expr: impl Into<Expr>, pos: SelectPosition) -> Self {
        self.clauses.add(expr.into(), pos);
        self
    }

    /// Add a node at an explicit clause position and order. Lower orders
    /// render first within the position.
    pub fn add_ordered(mut self, expr: impl Into<Expr>, pos: SelectPosition, order: i32) -> Self {
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

    pub fn clauses(&self) -> &ClauseMap<SelectPosition> {
        &self.clauses
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
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
        self.compiler.compile_select(self, buf, opts)
    }
}

impl std::fmt::Debug for Select {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Select")
            .field("clauses", &self.clauses)
            .field("distinct", &self.distinct)
            .finish_non_exhaustive()
    }
}

/// A pending join: target and kind are fixed, ON conditions complete it.
pub struct JoinBuilder {
    stmt: Select,
    kind: JoinKind,
    target: TableExpr,
}

impl JoinBuilder {
    /// Override the join target's alias for this occurrence.
    pub fn aliased(mut self, alias: &str) -> Self {
        assert!(!alias.is_empty(), "alias must not be empty");
        self.target.alias = Some(alias.to_string());
        self
    }

    /// Complete the join with its ON conditions and return to the
    /// statement. Exactly one join node is registered per sub-builder.
    pub fn on(mut self, cond: impl Into<Expr>) -> Select {
        // An explicit alias must also reach the alias table, so qualified
        // column references agree with the join target.
        if let (Dataset::Type(info), Some(alias)) = (&self.target.dataset, &self.target.alias) {
            self.stmt.aliases.set_info(info, alias.clone());
        }
        let mut on = ConditionGroup::new();
        on.push(cond);
        self.stmt.clauses.add(
            Expr::Join(JoinExpr::new(self.kind, self.target, on)),
            SelectPosition::Join,
        );
        self.stmt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builders::cmp;
    use crate::ast::builders::tcol;
    use crate::ast::Operator;
    use crate::builder::select;

    struct Order;
    struct Item;

    #[test]
    fn test_join_registers_single_node() {
        let stmt = select::<Order>()
            .inner_join::<Item>()
            .on(cmp(tcol::<Item>("order_id"), Operator::Eq, tcol::<Order>("id")));
        assert_eq!(stmt.clauses().entries(SelectPosition::Join).len(), 1);
    }

    #[test]
    fn test_limit_replaces_instead_of_duplicating() {
        let stmt = select::<Order>().limit(10).offset(5).limit(25);
        let after = stmt.clauses().entries(SelectPosition::After);
        assert_eq!(after.len(), 2);
        assert!(matches!(after[0], Expr::Limit(25)));
        assert!(matches!(after[1], Expr::Offset(5)));
    }

    #[test]
    fn test_for_update_is_idempotent() {
        let stmt = select::<Order>().for_update().for_update();
        let after = stmt.clauses().entries(SelectPosition::After);
        assert_eq!(after.len(), 1);
    }
}
