//! DELETE clause assembly.

use crate::ast::clauses::DeletePosition;
use crate::builder::Delete;
use crate::compiler::context::RenderContext;
use crate::compiler::insert::render_target;
use crate::compiler::join_parts;
use crate::compiler::select::push_chain_clause;
use crate::error::BuildResult;

/// Assemble a DELETE statement. A DELETE without WHERE renders without
/// one; guarding against full-table deletes is the caller's concern.
pub(crate) fn render_delete(
    stmt: &Delete,
    buf: &mut String,
    cx: &RenderContext<'_>,
) -> BuildResult<()> {
    let clauses = stmt.clauses();
    let mut parts: Vec<String> = Vec::new();

    // DELETE FROM target, bare.
    let mut head = String::from("DELETE FROM ");
    render_target(clauses.entries(DeletePosition::From), &mut head, cx)?;
    parts.push(head);

    // WHERE
    push_chain_clause("WHERE", clauses.entries(DeletePosition::Where), &mut parts, cx)?;

    // RETURNING and other trailing clauses.
    for tail in clauses.entries(DeletePosition::After) {
        let mut frag = String::new();
        cx.render_child(tail, &mut frag)?;
        if !frag.is_empty() {
            parts.push(frag);
        }
    }

    join_parts(buf, &parts, cx.options);
    Ok(())
}
