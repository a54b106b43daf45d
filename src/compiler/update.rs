//! UPDATE clause assembly.

use crate::ast::clauses::UpdatePosition;
use crate::builder::Update;
use crate::compiler::context::RenderContext;
use crate::compiler::expr::render_comma_list;
use crate::compiler::insert::render_target;
use crate::compiler::join_parts;
use crate::compiler::select::push_chain_clause;
use crate::error::{BuildError, BuildResult};

/// Assemble an UPDATE statement. An UPDATE with no assignments fails.
pub(crate) fn render_update(
    stmt: &Update,
    buf: &mut String,
    cx: &RenderContext<'_>,
) -> BuildResult<()> {
    let clauses = stmt.clauses();
    let mut parts: Vec<String> = Vec::new();

    // UPDATE target, bare.
    let mut head = String::from("UPDATE ");
    render_target(clauses.entries(UpdatePosition::Table), &mut head, cx)?;
    parts.push(head);

    // SET assignments.
    let mut set = String::new();
    if !render_comma_list(clauses.entries(UpdatePosition::Set), &mut set, cx)? {
        return Err(BuildError::incomplete("SET assignments", "UPDATE statement"));
    }
    parts.push(format!("SET {set}"));

    // WHERE
    push_chain_clause("WHERE", clauses.entries(UpdatePosition::Where), &mut parts, cx)?;

    // RETURNING and other trailing clauses.
    for tail in clauses.entries(UpdatePosition::After) {
        let mut frag = String::new();
        cx.render_child(tail, &mut frag)?;
        if !frag.is_empty() {
            parts.push(frag);
        }
    }

    join_parts(buf, &parts, cx.options);
    Ok(())
}
