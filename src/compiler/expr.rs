//! Canonical rendering for expression nodes.
//!
//! Each node appends its dialect-agnostic text to the caller's buffer.
//! Composite nodes route children through [`RenderContext::render_child`]
//! so a compiler-installed sub-render hook sees every nested node.

use crate::ast::conditions::{Condition, ConditionGroup, FullCondition};
use crate::ast::datasets::Dataset;
use crate::ast::expr::{CaseExpr, ColumnExpr, Expr, TableExpr};
use crate::ast::joins::JoinExpr;
use crate::ast::operators::{JoinKind, Operator};
use crate::compiler::context::RenderContext;
use crate::compiler::options::CompileOptions;
use crate::compiler::Render;
use crate::error::{BuildError, BuildResult};

impl Render for Expr {
    fn render(&self, buf: &mut String, cx: &RenderContext<'_>) -> BuildResult<()> {
        match self {
            Expr::Column(col) => {
                render_column(col, buf, cx);
                Ok(())
            }
            Expr::Table(table) => {
                render_table(table, buf, cx);
                Ok(())
            }
            Expr::Value(value) => {
                value.write_literal(buf);
                Ok(())
            }
            Expr::Op(op) => {
                buf.push_str(op.sql_symbol());
                Ok(())
            }
            Expr::Raw(sql) => {
                buf.push_str(sql);
                Ok(())
            }
            Expr::NoOp => Ok(()),
            Expr::Compare(cond) => cond.render(buf, cx),
            Expr::Group(group) => group.render(buf, cx),
            Expr::Full(full) => full.render(buf, cx),
            Expr::Join(join) => join.render(buf, cx),
            Expr::Case(case) => case.render(buf, cx),
            Expr::Type(ty) => {
                let name = cx.type_name(ty)?;
                buf.push_str(&name);
                Ok(())
            }
            Expr::Ordering { expr, dir } => {
                cx.render_child(expr, buf)?;
                buf.push(' ');
                buf.push_str(dir.keyword());
                Ok(())
            }
            Expr::Assign { column, value } => {
                cx.render_child(column, buf)?;
                buf.push_str(" = ");
                cx.render_child(value, buf)
            }
            Expr::Row(items) => {
                buf.push('(');
                render_comma_list(items, buf, cx)?;
                buf.push(')');
                Ok(())
            }
            Expr::Cast { expr, target } => {
                buf.push_str("CAST(");
                cx.render_child(expr, buf)?;
                buf.push_str(" AS ");
                let name = cx.type_name(target)?;
                buf.push_str(&name);
                buf.push(')');
                Ok(())
            }
            Expr::FunctionCall { name, args } => {
                buf.push_str(name);
                buf.push('(');
                render_comma_list(args, buf, cx)?;
                buf.push(')');
                Ok(())
            }
            Expr::Aliased { expr, alias } => {
                cx.render_child(expr, buf)?;
                buf.push_str(" AS ");
                buf.push_str(alias);
                Ok(())
            }
            // Nested statements always render compact; the FORMAT flag only
            // shapes the outermost statement.
            Expr::Subquery(query) => {
                buf.push('(');
                query.compile_into(buf, cx.options.without(CompileOptions::FORMAT))?;
                buf.push(')');
                Ok(())
            }
            Expr::Union { all, query } => {
                buf.push_str(if *all { "UNION ALL " } else { "UNION " });
                query.compile_into(buf, cx.options.without(CompileOptions::FORMAT))
            }
            Expr::Limit(n) => {
                buf.push_str("LIMIT ");
                buf.push_str(&n.to_string());
                Ok(())
            }
            Expr::Offset(n) => {
                buf.push_str("OFFSET ");
                buf.push_str(&n.to_string());
                Ok(())
            }
            Expr::ForUpdate => {
                buf.push_str("FOR UPDATE");
                Ok(())
            }
            Expr::Returning(items) => {
                buf.push_str("RETURNING ");
                render_comma_list(items, buf, cx)?;
                Ok(())
            }
        }
    }
}

impl Render for Condition {
    fn render(&self, buf: &mut String, cx: &RenderContext<'_>) -> BuildResult<()> {
        if self.negated {
            buf.push_str("NOT ");
        }
        // EXISTS-class conditions carry a no-op left operand; skip the
        // leading space they would otherwise produce.
        let mut left = String::new();
        cx.render_child(&self.left, &mut left)?;
        if !left.is_empty() {
            buf.push_str(&left);
            buf.push(' ');
        }
        buf.push_str(self.op.sql_symbol());
        if self.op.needs_value() {
            let right = self
                .right
                .as_deref()
                .ok_or_else(|| BuildError::incomplete("right operand", "condition"))?;
            buf.push(' ');
            match self.op {
                Operator::Between | Operator::NotBetween => render_bounds(right, buf, cx)?,
                _ => cx.render_child(right, buf)?,
            }
        }
        Ok(())
    }
}

impl Render for ConditionGroup {
    fn render(&self, buf: &mut String, cx: &RenderContext<'_>) -> BuildResult<()> {
        let mut body = String::new();
        render_chain(&self.items, &mut body, cx)?;
        // Nothing rendered means nothing emitted, never a bare `()`.
        if body.is_empty() {
            return Ok(());
        }
        if self.negated {
            buf.push_str("NOT ");
        }
        if self.grouped {
            buf.push('(');
            buf.push_str(&body);
            buf.push(')');
        } else {
            buf.push_str(&body);
        }
        Ok(())
    }
}

impl Render for FullCondition {
    fn render(&self, buf: &mut String, cx: &RenderContext<'_>) -> BuildResult<()> {
        let mut body = String::new();
        cx.render_child(&self.expr, &mut body)?;
        if body.is_empty() {
            return Ok(());
        }
        if self.negated {
            buf.push_str("NOT ");
        }
        buf.push_str(&body);
        Ok(())
    }
}

impl Render for JoinExpr {
    fn render(&self, buf: &mut String, cx: &RenderContext<'_>) -> BuildResult<()> {
        buf.push_str(self.kind.keyword());
        buf.push(' ');
        render_table(&self.target, buf, cx);
        if self.kind == JoinKind::Cross {
            return Ok(());
        }
        let mut on = String::new();
        self.on.render(&mut on, cx)?;
        if !on.is_empty() {
            buf.push_str(" ON ");
            buf.push_str(&on);
        }
        Ok(())
    }
}

impl Render for CaseExpr {
    fn render(&self, buf: &mut String, cx: &RenderContext<'_>) -> BuildResult<()> {
        if self.branches.is_empty() {
            return Err(BuildError::incomplete("WHEN branch", "CASE expression"));
        }
        buf.push_str("CASE");
        for (predicate, result) in &self.branches {
            buf.push_str(" WHEN ");
            cx.render_child(predicate, buf)?;
            buf.push_str(" THEN ");
            cx.render_child(result, buf)?;
        }
        if let Some(default) = &self.default {
            buf.push_str(" ELSE ");
            cx.render_child(default, buf)?;
        }
        buf.push_str(" END");
        Ok(())
    }
}

/// Render condition-chain items in insertion order, linking consecutive
/// rendered items with each item's trailing operator (AND when unset).
/// Items that render to nothing are skipped along with their links; the
/// last rendered item never emits a trailing operator.
pub(crate) fn render_chain<'e, I>(
    items: I,
    buf: &mut String,
    cx: &RenderContext<'_>,
) -> BuildResult<()>
where
    I: IntoIterator<Item = &'e Expr>,
{
    let mut rendered: Vec<(String, Option<crate::ast::operators::LogicOp>)> = Vec::new();
    for item in items {
        let mut frag = String::new();
        cx.render_child(item, &mut frag)?;
        if frag.is_empty() {
            continue;
        }
        rendered.push((frag, item.chain_link()));
    }
    let last = rendered.len().saturating_sub(1);
    for (i, (frag, link)) in rendered.iter().enumerate() {
        if i > 0 {
            buf.push(' ');
        }
        buf.push_str(frag);
        if i < last {
            buf.push(' ');
            buf.push_str(link.unwrap_or_default().keyword());
        }
    }
    Ok(())
}

/// Render items separated by `, `, skipping any that render to nothing.
/// Returns whether anything was written.
pub(crate) fn render_comma_list<'e, I>(
    items: I,
    buf: &mut String,
    cx: &RenderContext<'_>,
) -> BuildResult<bool>
where
    I: IntoIterator<Item = &'e Expr>,
{
    let mut wrote = false;
    for item in items {
        let mut frag = String::new();
        cx.render_child(item, &mut frag)?;
        if frag.is_empty() {
            continue;
        }
        if wrote {
            buf.push_str(", ");
        }
        buf.push_str(&frag);
        wrote = true;
    }
    Ok(wrote)
}

/// The bare dataset name, without any alias. INSERT/UPDATE/DELETE targets
/// render through this.
pub(crate) fn render_table_name(table: &TableExpr, buf: &mut String, cx: &RenderContext<'_>) {
    match &table.dataset {
        Dataset::Type(info) => buf.push_str(&cx.dataset_name(info)),
        Dataset::Token(token) => buf.push_str(&cx.object_name(token)),
    }
}

fn render_column(col: &ColumnExpr, buf: &mut String, cx: &RenderContext<'_>) {
    if let Some(dataset) = &col.dataset {
        match dataset {
            Dataset::Type(info) => buf.push_str(&cx.alias_of(info)),
            Dataset::Token(token) => buf.push_str(&cx.object_name(token)),
        }
        buf.push('.');
    }
    if col.name == "*" {
        buf.push('*');
    } else {
        buf.push_str(&cx.object_name(&col.name));
    }
}

/// FROM/JOIN form: type datasets always carry their alias so qualified
/// columns resolve; token datasets stay bare unless one was set explicitly.
fn render_table(table: &TableExpr, buf: &mut String, cx: &RenderContext<'_>) {
    render_table_name(table, buf, cx);
    match (&table.dataset, &table.alias) {
        (_, Some(alias)) => {
            buf.push(' ');
            buf.push_str(alias);
        }
        (Dataset::Type(info), None) => {
            buf.push(' ');
            buf.push_str(&cx.alias_of(info));
        }
        (Dataset::Token(_), None) => {}
    }
}

/// BETWEEN bounds: a two-item row renders as `low AND high`; any other
/// expression (e.g. a raw fragment) renders as written.
fn render_bounds(right: &Expr, buf: &mut String, cx: &RenderContext<'_>) -> BuildResult<()> {
    match right {
        Expr::Row(items) if items.len() == 2 => {
            cx.render_child(&items[0], buf)?;
            buf.push_str(" AND ");
            cx.render_child(&items[1], buf)
        }
        Expr::Row(_) => Err(BuildError::incomplete("range bounds", "BETWEEN condition")),
        other => cx.render_child(other, buf),
    }
}
