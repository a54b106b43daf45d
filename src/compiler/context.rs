//! Render context threaded through every node render.

use crate::ast::datasets::TypeInfo;
use crate::ast::expr::{Expr, TypeExpr};
use crate::builder::alias::AliasTable;
use crate::compiler::options::CompileOptions;
use crate::compiler::Render;
use crate::error::{BuildError, BuildResult};

/// Converts a dataset type identity to its SQL name.
pub type DatasetNameFn = dyn Fn(&TypeInfo) -> String + Send + Sync;
/// Converts an object name (column, alias) to its SQL spelling.
pub type ObjectNameFn = dyn Fn(&str) -> String + Send + Sync;
/// Converts a type identity plus optional length to a SQL type name.
pub type TypeNameFn = dyn Fn(&TypeInfo, Option<u32>) -> String + Send + Sync;
/// Intercepts nested renders; falls back to the node's own render.
pub type SubRenderFn = dyn Fn(&Expr, &mut String, &RenderContext<'_>) -> BuildResult<()>;

/// Everything a node needs while rendering: the option flags, the
/// statement's alias table, the compiler's converter delegates, and an
/// optional sub-render hook for composite nodes.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub options: CompileOptions,
    aliases: &'a AliasTable,
    dataset_names: Option<&'a DatasetNameFn>,
    object_names: Option<&'a ObjectNameFn>,
    type_names: Option<&'a TypeNameFn>,
    sub: Option<&'a SubRenderFn>,
}

impl<'a> RenderContext<'a> {
    /// A context with no converters: names render verbatim, type
    /// expressions fail.
    pub fn new(aliases: &'a AliasTable, options: CompileOptions) -> Self {
        Self {
            options,
            aliases,
            dataset_names: None,
            object_names: None,
            type_names: None,
            sub: None,
        }
    }

    pub(crate) fn with_delegates(
        aliases: &'a AliasTable,
        options: CompileOptions,
        dataset_names: Option<&'a DatasetNameFn>,
        object_names: Option<&'a ObjectNameFn>,
        type_names: Option<&'a TypeNameFn>,
    ) -> Self {
        Self {
            options,
            aliases,
            dataset_names,
            object_names,
            type_names,
            sub: None,
        }
    }

    /// A copy of this context with a sub-render hook installed.
    pub fn with_sub_render(mut self, sub: &'a SubRenderFn) -> Self {
        self.sub = Some(sub);
        self
    }

    /// Resolve the SQL name of a dataset type. Defaults to the type's
    /// simple name.
    pub fn dataset_name(&self, info: &TypeInfo) -> String {
        match self.dataset_names {
            Some(f) => f(info),
            None => info.name().to_string(),
        }
    }

    /// Resolve the SQL spelling of an object name. Defaults to identity.
    pub fn object_name(&self, name: &str) -> String {
        match self.object_names {
            Some(f) => f(name),
            None => name.to_string(),
        }
    }

    /// Resolve a SQL type name. There is no default; rendering a type
    /// without a registered converter fails.
    pub fn type_name(&self, ty: &TypeExpr) -> BuildResult<String> {
        match self.type_names {
            Some(f) => Ok(f(&ty.info, ty.len)),
            None => Err(BuildError::MissingTypeConverter),
        }
    }

    /// The alias for a dataset type, assigned on first contact.
    pub fn alias_of(&self, info: &TypeInfo) -> String {
        self.aliases.resolve(info)
    }

    /// Render a nested expression, routing through the sub-render hook
    /// when one is installed.
    pub fn render_child(&self, expr: &Expr, buf: &mut String) -> BuildResult<()> {
        match self.sub {
            Some(f) => f(expr, buf, self),
            None => expr.render(buf, self),
        }
    }
}
