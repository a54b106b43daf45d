//! CTE and script statement builders: WITH, DECLARE, SET, IF.

use std::sync::Arc;

use crate::ast::expr::{Expr, TypeExpr};
use crate::builder::{Select, Statement};
use crate::compiler::{Compiler, CompileOptions, GenericCompiler};
use crate::error::BuildResult;

/// One named CTE definition.
#[derive(Debug, Clone)]
pub struct CteDef {
    pub name: String,
    pub body: Select,
}

/// Fluent builder for WITH blocks.
///
/// Holds one or more CTE definitions and the terminal statement that
/// consumes them. Building without a terminal statement fails.
#[derive(Clone)]
pub struct With {
    defs: Vec<CteDef>,
    recursive: bool,
    terminal: Option<Box<Statement>>,
    compiler: Arc<dyn Compiler>,
}

impl With {
    pub(crate) fn new(name: impl Into<String>, body: Select) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "CTE name must not be empty");
        Self {
            defs: vec![CteDef { name, body }],
            recursive: false,
            terminal: None,
            compiler: GenericCompiler::shared(),
        }
    }

    /// Add another CTE definition.
    pub fn and_with(mut self, name: impl Into<String>, body: Select) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "CTE name must not be empty");
        self.defs.push(CteDef { name, body });
        self
    }

    /// Mark the block WITH RECURSIVE.
    pub fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }

    /// Set the terminal statement that consumes the CTEs.
    pub fn then(mut self, stmt: impl Into<Statement>) -> Self {
        self.terminal = Some(Box::new(stmt.into()));
        self
    }

    /// Swap in a different compiler.
    pub fn compiled_by(mut self, compiler: Arc<dyn Compiler>) -> Self {
        self.compiler = compiler;
        self
    }

    pub fn defs(&self) -> &[CteDef] {
        &self.defs
    }

    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    pub fn terminal(&self) -> Option<&Statement> {
        self.terminal.as_deref()
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
        self.compiler.compile_with(self, buf, opts)
    }
}

impl std::fmt::Debug for With {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("With")
            .field("defs", &self.defs)
            .field("recursive", &self.recursive)
            .field("terminal", &self.terminal)
            .finish_non_exhaustive()
    }
}

/// Fluent builder for DECLARE variable statements.
///
/// The variable type renders through the compiler's type converter.
#[derive(Clone)]
pub struct Declare {
    name: String,
    ty: TypeExpr,
    init: Option<Expr>,
    compiler: Arc<dyn Compiler>,
}

impl Declare {
    pub(crate) fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "variable name must not be empty");
        Self {
            name,
            ty,
            init: None,
            compiler: GenericCompiler::shared(),
        }
    }

    /// Initialize the variable in the declaration.
    pub fn init(mut self, value: impl Into<Expr>) -> Self {
        self.init = Some(value.into());
        self
    }

    /// Swap in a different compiler.
    pub fn compiled_by(mut self, compiler: Arc<dyn Compiler>) -> Self {
        self.compiler = compiler;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> TypeExpr {
        self.ty
    }

    pub fn init_value(&self) -> Option<&Expr> {
        self.init.as_ref()
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
        self.compiler.compile_declare(self, buf, opts)
    }
}

impl std::fmt::Debug for Declare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Declare")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("init", &self.init)
            .finish_non_exhaustive()
    }
}

/// Fluent builder for SET variable-assignment statements.
#[derive(Clone)]
pub struct SetVar {
    name: String,
    value: Expr,
    compiler: Arc<dyn Compiler>,
}

impl SetVar {
    pub(crate) fn new(name: impl Into<String>, value: impl Into<Expr>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "variable name must not be empty");
        Self {
            name,
            value: value.into(),
            compiler: GenericCompiler::shared(),
        }
    }

    /// Swap in a different compiler.
    pub fn compiled_by(mut self, compiler: Arc<dyn Compiler>) -> Self {
        self.compiler = compiler;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Expr {
        &self.value
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
        self.compiler.compile_set(self, buf, opts)
    }
}

impl std::fmt::Debug for SetVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetVar")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// Fluent builder for IF/ELSE script blocks.
///
/// Renders in SQL/PSM form: `IF cond THEN stmt ELSE stmt END IF`.
/// Building without a THEN branch fails.
#[derive(Clone)]
pub struct If {
    cond: Expr,
    then_branch: Option<Box<Statement>>,
    else_branch: Option<Box<Statement>>,
    compiler: Arc<dyn Compiler>,
}

impl If {
    pub(crate) fn new(cond: impl Into<Expr>) -> Self {
        Self {
            cond: cond.into(),
            then_branch: None,
            else_branch: None,
            compiler: GenericCompiler::shared(),
        }
    }

    /// Set the THEN branch.
    pub fn then(mut self, stmt: impl Into<Statement>) -> Self {
        self.then_branch = Some(Box::new(stmt.into()));
        self
    }

    /// Set the ELSE branch.
    pub fn else_(mut self, stmt: impl Into<Statement>) -> Self {
        self.else_branch = Some(Box::new(stmt.into()));
        self
    }

    /// Swap in a different compiler.
    pub fn compiled_by(mut self, compiler: Arc<dyn Compiler>) -> Self {
        self.compiler = compiler;
        self
    }

    pub fn cond(&self) -> &Expr {
        &self.cond
    }

    pub fn then_branch(&self) -> Option<&Statement> {
        self.then_branch.as_deref()
    }

    pub fn else_branch(&self) -> Option<&Statement> {
        self.else_branch.as_deref()
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
        self.compiler.compile_if(self, buf, opts)
    }
}

impl std::fmt::Debug for If {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("If")
            .field("cond", &self.cond)
            .field("then_branch", &self.then_branch)
            .field("else_branch", &self.else_branch)
            .finish_non_exhaustive()
    }
}
