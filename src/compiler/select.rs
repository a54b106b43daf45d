//! SELECT clause assembly.

use crate::ast::clauses::SelectPosition;
use crate::ast::expr::Expr;
use crate::builder::Select;
use crate::compiler::context::RenderContext;
use crate::compiler::expr::{render_chain, render_comma_list};
use crate::compiler::join_parts;
use crate::error::BuildResult;

/// Assemble a SELECT statement in canonical clause order.
pub(crate) fn render_select(
    stmt: &Select,
    buf: &mut String,
    cx: &RenderContext<'_>,
) -> BuildResult<()> {
    let clauses = stmt.clauses();
    let mut parts: Vec<String> = Vec::new();

    // Select list; an empty list renders `*`.
    let mut head = String::from(if stmt.is_distinct() {
        "SELECT DISTINCT "
    } else {
        "SELECT "
    });
    let mut list = String::new();
    if render_comma_list(clauses.entries(SelectPosition::Columns), &mut list, cx)? {
        head.push_str(&list);
    } else {
        head.push('*');
    }
    parts.push(head);

    // FROM
    let mut from = String::new();
    if render_comma_list(clauses.entries(SelectPosition::From), &mut from, cx)? {
        parts.push(format!("FROM {from}"));
    }

    // Joins, one fragment each, in registration order.
    for join in clauses.entries(SelectPosition::Join) {
        let mut frag = String::new();
        cx.render_child(join, &mut frag)?;
        if !frag.is_empty() {
            parts.push(frag);
        }
    }

    // WHERE
    push_chain_clause("WHERE", clauses.entries(SelectPosition::Where), &mut parts, cx)?;

    // GROUP BY
    let mut group = String::new();
    if render_comma_list(clauses.entries(SelectPosition::GroupBy), &mut group, cx)? {
        parts.push(format!("GROUP BY {group}"));
    }

    // HAVING
    push_chain_clause("HAVING", clauses.entries(SelectPosition::Having), &mut parts, cx)?;

    // ORDER BY
    let mut order = String::new();
    if render_comma_list(clauses.entries(SelectPosition::OrderBy), &mut order, cx)? {
        parts.push(format!("ORDER BY {order}"));
    }

    // Trailing modifiers: LIMIT, OFFSET, FOR UPDATE, set operations.
    for tail in clauses.entries(SelectPosition::After) {
        let mut frag = String::new();
        cx.render_child(tail, &mut frag)?;
        if !frag.is_empty() {
            parts.push(frag);
        }
    }

    join_parts(buf, &parts, cx.options);
    Ok(())
}

/// Chain the entries of a predicate clause behind its keyword. The clause
/// is suppressed entirely when nothing renders.
pub(crate) fn push_chain_clause(
    keyword: &str,
    entries: Vec<&Expr>,
    parts: &mut Vec<String>,
    cx: &RenderContext<'_>,
) -> BuildResult<()> {
    let mut chain = String::new();
    render_chain(entries, &mut chain, cx)?;
    if !chain.is_empty() {
        parts.push(format!("{keyword} {chain}"));
    }
    Ok(())
}
