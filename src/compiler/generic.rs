//! The dialect-agnostic compiler.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::ast::datasets::TypeInfo;
use crate::ast::expr::Expr;
use crate::builder::alias::AliasTable;
use crate::builder::{Declare, Delete, If, Insert, Select, SetVar, Update, With};
use crate::compiler::context::{DatasetNameFn, ObjectNameFn, RenderContext, TypeNameFn};
use crate::compiler::options::CompileOptions;
use crate::compiler::{delete, insert, script, select, update, Compiler, Render};
use crate::error::BuildResult;

static SHARED: Lazy<Arc<GenericCompiler>> = Lazy::new(|| Arc::new(GenericCompiler::new()));

/// Renders canonical SQL with no dialect-specific quoting or casing.
///
/// Name resolution goes through three optional converter delegates:
/// dataset names (type identity to table name, defaults to the simple type
/// name), object names (column/table tokens, defaults to pass-through),
/// and SQL type names (no default; rendering a type expression without one
/// fails). Installing converters is how a dialect adapter reuses this
/// compiler wholesale.
///
/// ```
/// use sqlcraft::compiler::GenericCompiler;
///
/// let compiler = GenericCompiler::new()
///     .with_dataset_converter(|info| format!("{}s", info.name().to_lowercase()))
///     .into_shared();
/// ```
#[derive(Default)]
pub struct GenericCompiler {
    dataset_names: Option<Box<DatasetNameFn>>,
    object_names: Option<Box<ObjectNameFn>>,
    type_names: Option<Box<TypeNameFn>>,
}

impl GenericCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared default instance every builder starts with.
    pub fn shared() -> Arc<dyn Compiler> {
        SHARED.clone()
    }

    pub fn into_shared(self) -> Arc<dyn Compiler> {
        Arc::new(self)
    }

    /// Install a dataset-name converter (type identity to table name).
    pub fn with_dataset_converter(
        mut self,
        f: impl Fn(&TypeInfo) -> String + Send + Sync + 'static,
    ) -> Self {
        self.dataset_names = Some(Box::new(f));
        self
    }

    /// Install an object-name converter (column and table tokens).
    pub fn with_object_converter(
        mut self,
        f: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.object_names = Some(Box::new(f));
        self
    }

    /// Install a type-name converter (type identity plus optional length).
    pub fn with_type_converter(
        mut self,
        f: impl Fn(&TypeInfo, Option<u32>) -> String + Send + Sync + 'static,
    ) -> Self {
        self.type_names = Some(Box::new(f));
        self
    }

    fn context<'a>(&'a self, aliases: &'a AliasTable, opts: CompileOptions) -> RenderContext<'a> {
        RenderContext::with_delegates(
            aliases,
            opts,
            self.dataset_names.as_deref(),
            self.object_names.as_deref(),
            self.type_names.as_deref(),
        )
    }
}

impl std::fmt::Debug for GenericCompiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericCompiler")
            .field("dataset_converter", &self.dataset_names.is_some())
            .field("object_converter", &self.object_names.is_some())
            .field("type_converter", &self.type_names.is_some())
            .finish()
    }
}

impl Compiler for GenericCompiler {
    fn compile_select(
        &self,
        stmt: &Select,
        buf: &mut String,
        opts: CompileOptions,
    ) -> BuildResult<()> {
        tracing::trace!("compiling SELECT");
        select::render_select(stmt, buf, &self.context(stmt.aliases(), opts))
    }

    fn compile_insert(
        &self,
        stmt: &Insert,
        buf: &mut String,
        opts: CompileOptions,
    ) -> BuildResult<()> {
        tracing::trace!("compiling INSERT");
        insert::render_insert(stmt, buf, &self.context(stmt.aliases(), opts))
    }

    fn compile_update(
        &self,
        stmt: &Update,
        buf: &mut String,
        opts: CompileOptions,
    ) -> BuildResult<()> {
        tracing::trace!("compiling UPDATE");
        update::render_update(stmt, buf, &self.context(stmt.aliases(), opts))
    }

    fn compile_delete(
        &self,
        stmt: &Delete,
        buf: &mut String,
        opts: CompileOptions,
    ) -> BuildResult<()> {
        tracing::trace!("compiling DELETE");
        delete::render_delete(stmt, buf, &self.context(stmt.aliases(), opts))
    }

    fn compile_with(&self, stmt: &With, buf: &mut String, opts: CompileOptions) -> BuildResult<()> {
        tracing::trace!("compiling WITH");
        script::render_with(stmt, buf, opts)
    }

    fn compile_declare(
        &self,
        stmt: &Declare,
        buf: &mut String,
        opts: CompileOptions,
    ) -> BuildResult<()> {
        tracing::trace!("compiling DECLARE");
        let aliases = AliasTable::new();
        script::render_declare(stmt, buf, &self.context(&aliases, opts))
    }

    fn compile_set(
        &self,
        stmt: &SetVar,
        buf: &mut String,
        opts: CompileOptions,
    ) -> BuildResult<()> {
        tracing::trace!("compiling SET");
        let aliases = AliasTable::new();
        script::render_set(stmt, buf, &self.context(&aliases, opts))
    }

    fn compile_if(&self, stmt: &If, buf: &mut String, opts: CompileOptions) -> BuildResult<()> {
        tracing::trace!("compiling IF");
        let aliases = AliasTable::new();
        script::render_if(stmt, buf, &self.context(&aliases, opts))
    }

    fn compile_expr(&self, expr: &Expr, buf: &mut String, opts: CompileOptions) -> BuildResult<()> {
        let aliases = AliasTable::new();
        expr.render(buf, &self.context(&aliases, opts))
    }
}
