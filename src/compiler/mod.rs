//! Statement compilation.
//!
//! Builders collect nodes; compilers turn them into SQL text. The
//! [`Compiler`] trait has one operation per statement kind plus ad-hoc
//! expression rendering, and a statement always goes through exactly the
//! operation matching its kind. [`GenericCompiler`] renders canonical
//! dialect-agnostic text; dialect-specific compilers plug in through the
//! same trait.

pub mod context;
pub mod options;

mod delete;
mod expr;
mod generic;
mod insert;
mod script;
mod select;
mod update;

#[cfg(test)]
mod tests;

pub use context::{DatasetNameFn, ObjectNameFn, RenderContext, SubRenderFn, TypeNameFn};
pub use generic::GenericCompiler;
pub use options::CompileOptions;

use crate::ast::expr::Expr;
use crate::builder::{Declare, Delete, If, Insert, Select, SetVar, Update, With};
use crate::error::BuildResult;

/// Rendering contract: append canonical SQL for this node to the buffer.
///
/// Composite nodes render their children through
/// [`RenderContext::render_child`], so a compiler can intercept nested
/// rendering with a sub-render hook.
pub trait Render {
    fn render(&self, buf: &mut String, cx: &RenderContext<'_>) -> BuildResult<()>;
}

/// Turns statements into SQL text.
///
/// Implementations hold no mutable state; one instance may serve any
/// number of builders concurrently.
pub trait Compiler: Send + Sync {
    fn compile_select(&self, stmt: &Select, buf: &mut String, opts: CompileOptions)
        -> BuildResult<()>;

    fn compile_insert(&self, stmt: &Insert, buf: &mut String, opts: CompileOptions)
        -> BuildResult<()>;

    fn compile_update(&self, stmt: &Update, buf: &mut String, opts: CompileOptions)
        -> BuildResult<()>;

    fn compile_delete(&self, stmt: &Delete, buf: &mut String, opts: CompileOptions)
        -> BuildResult<()>;

    fn compile_with(&self, stmt: &With, buf: &mut String, opts: CompileOptions) -> BuildResult<()>;

    fn compile_declare(
        &self,
        stmt: &Declare,
        buf: &mut String,
        opts: CompileOptions,
    ) -> BuildResult<()>;

    fn compile_set(&self, stmt: &SetVar, buf: &mut String, opts: CompileOptions)
        -> BuildResult<()>;

    fn compile_if(&self, stmt: &If, buf: &mut String, opts: CompileOptions) -> BuildResult<()>;

    /// Render a single expression with no statement context.
    fn compile_expr(&self, expr: &Expr, buf: &mut String, opts: CompileOptions) -> BuildResult<()>;
}

/// Join rendered clause fragments: spaces normally, one clause per line
/// under FORMAT.
pub(crate) fn join_parts(buf: &mut String, parts: &[String], opts: CompileOptions) {
    let sep = if opts.contains(CompileOptions::FORMAT) {
        '\n'
    } else {
        ' '
    };
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            buf.push(sep);
        }
        buf.push_str(part);
    }
}
