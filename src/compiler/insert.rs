//! INSERT clause assembly.

use crate::ast::clauses::InsertPosition;
use crate::ast::expr::Expr;
use crate::builder::Insert;
use crate::compiler::context::RenderContext;
use crate::compiler::expr::{render_comma_list, render_table_name};
use crate::compiler::join_parts;
use crate::compiler::options::CompileOptions;
use crate::error::{BuildError, BuildResult};

/// Assemble an INSERT statement. The source is either VALUES rows or a
/// nested SELECT; an INSERT with neither fails.
pub(crate) fn render_insert(
    stmt: &Insert,
    buf: &mut String,
    cx: &RenderContext<'_>,
) -> BuildResult<()> {
    let clauses = stmt.clauses();
    let mut parts: Vec<String> = Vec::new();

    // INSERT INTO target, bare (write targets never alias).
    let mut head = String::from("INSERT INTO ");
    render_target(clauses.entries(InsertPosition::Into), &mut head, cx)?;

    // Optional column list.
    let mut cols = String::new();
    if render_comma_list(clauses.entries(InsertPosition::Columns), &mut cols, cx)? {
        head.push_str(" (");
        head.push_str(&cols);
        head.push(')');
    }
    parts.push(head);

    // VALUES rows, or the SELECT source. Rows win when both were set.
    let mut rows: Vec<String> = Vec::new();
    let mut source: Option<String> = None;
    for entry in clauses.entries(InsertPosition::Values) {
        match entry {
            Expr::Subquery(query) => {
                let mut sql = String::new();
                query.compile_into(&mut sql, cx.options.without(CompileOptions::FORMAT))?;
                source = Some(sql);
            }
            other => {
                let mut row = String::new();
                cx.render_child(other, &mut row)?;
                if !row.is_empty() {
                    rows.push(row);
                }
            }
        }
    }
    if !rows.is_empty() {
        parts.push(format!("VALUES {}", rows.join(", ")));
    } else if let Some(sql) = source {
        parts.push(sql);
    } else {
        return Err(BuildError::incomplete("row values", "INSERT statement"));
    }

    // RETURNING and other trailing clauses.
    for tail in clauses.entries(InsertPosition::After) {
        let mut frag = String::new();
        cx.render_child(tail, &mut frag)?;
        if !frag.is_empty() {
            parts.push(frag);
        }
    }

    join_parts(buf, &parts, cx.options);
    Ok(())
}

/// The statement's single write target, rendered without an alias.
pub(crate) fn render_target(
    entries: Vec<&Expr>,
    buf: &mut String,
    cx: &RenderContext<'_>,
) -> BuildResult<()> {
    match entries.first() {
        Some(Expr::Table(table)) => {
            render_table_name(table, buf, cx);
            Ok(())
        }
        Some(other) => cx.render_child(other, buf),
        None => Err(BuildError::incomplete("target dataset", "write statement")),
    }
}
