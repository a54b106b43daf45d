//! Script statement assembly: WITH, DECLARE, SET, IF.
//!
//! Script statements compose other statements. Nested statements compile
//! through their own builders' compilers, so a WITH block can mix a
//! dialect-compiled body with a generically compiled terminal.

use crate::builder::{Declare, If, SetVar, With};
use crate::compiler::context::RenderContext;
use crate::compiler::join_parts;
use crate::compiler::options::CompileOptions;
use crate::error::{BuildError, BuildResult};

/// `WITH [RECURSIVE] name AS (body), ... terminal`. Building without a
/// terminal statement fails.
pub(crate) fn render_with(stmt: &With, buf: &mut String, opts: CompileOptions) -> BuildResult<()> {
    let mut parts: Vec<String> = Vec::new();

    let mut head = String::from(if stmt.is_recursive() {
        "WITH RECURSIVE "
    } else {
        "WITH "
    });
    // CTE bodies always render compact inside their parentheses.
    let mut defs: Vec<String> = Vec::with_capacity(stmt.defs().len());
    for def in stmt.defs() {
        let mut body = String::new();
        def.body
            .compile_into(&mut body, opts.without(CompileOptions::FORMAT))?;
        defs.push(format!("{} AS ({})", def.name, body));
    }
    head.push_str(&defs.join(", "));
    parts.push(head);

    let terminal = stmt
        .terminal()
        .ok_or_else(|| BuildError::incomplete("terminal statement", "WITH block"))?;
    let mut tail = String::new();
    terminal.compile_into(&mut tail, opts)?;
    parts.push(tail);

    join_parts(buf, &parts, opts);
    Ok(())
}

/// `DECLARE name type [= init]`. The variable name renders verbatim;
/// dialect sigils belong to the caller.
pub(crate) fn render_declare(
    stmt: &Declare,
    buf: &mut String,
    cx: &RenderContext<'_>,
) -> BuildResult<()> {
    buf.push_str("DECLARE ");
    buf.push_str(stmt.name());
    buf.push(' ');
    let ty = cx.type_name(&stmt.ty())?;
    buf.push_str(&ty);
    if let Some(init) = stmt.init_value() {
        buf.push_str(" = ");
        cx.render_child(init, buf)?;
    }
    Ok(())
}

/// `SET name = value`.
pub(crate) fn render_set(
    stmt: &SetVar,
    buf: &mut String,
    cx: &RenderContext<'_>,
) -> BuildResult<()> {
    buf.push_str("SET ");
    buf.push_str(stmt.name());
    buf.push_str(" = ");
    cx.render_child(stmt.value(), buf)
}

/// `IF cond THEN stmt [ELSE stmt] END IF`. Branch statements render
/// compact, without separators of their own.
pub(crate) fn render_if(stmt: &If, buf: &mut String, cx: &RenderContext<'_>) -> BuildResult<()> {
    buf.push_str("IF ");
    cx.render_child(stmt.cond(), buf)?;
    buf.push_str(" THEN ");
    let then = stmt
        .then_branch()
        .ok_or_else(|| BuildError::incomplete("THEN branch", "IF statement"))?;
    then.compile_into(buf, cx.options.without(CompileOptions::FORMAT))?;
    if let Some(els) = stmt.else_branch() {
        buf.push_str(" ELSE ");
        els.compile_into(buf, cx.options.without(CompileOptions::FORMAT))?;
    }
    buf.push_str(" END IF");
    Ok(())
}
