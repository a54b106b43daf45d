//! Statement builders and their entry points.
//!
//! Each statement kind has a builder that owns a clause map, an alias
//! table, and a compiler. The free functions below are the intended way
//! in: `select::<Order>()`, `insert::<Order>()`, and so on. Builders are
//! cheap to clone and render without mutating, so a base query can be
//! cloned and specialized freely.

pub mod alias;
pub mod delete;
pub mod insert;
pub mod script;
pub mod select;
pub mod update;

pub use alias::AliasTable;
pub use delete::Delete;
pub use insert::Insert;
pub use script::{CteDef, Declare, If, SetVar, With};
pub use select::{JoinBuilder, Select};
pub use update::Update;

use crate::ast::expr::{Expr, TypeExpr};
use crate::compiler::CompileOptions;
use crate::error::BuildResult;

/// Start a SELECT over the dataset type `T`.
pub fn select<T: 'static>() -> Select {
    Select::of::<T>()
}

/// Start a SELECT over a literal dataset name.
pub fn select_from(table: impl Into<String>) -> Select {
    Select::of_token(table)
}

/// Start an INSERT into the dataset type `T`.
pub fn insert<T: 'static>() -> Insert {
    Insert::of::<T>()
}

/// Start an INSERT into a literal dataset name.
pub fn insert_into(table: impl Into<String>) -> Insert {
    Insert::of_token(table)
}

/// Start an UPDATE of the dataset type `T`.
pub fn update<T: 'static>() -> Update {
    Update::of::<T>()
}

/// Start an UPDATE of a literal dataset name.
pub fn update_table(table: impl Into<String>) -> Update {
    Update::of_token(table)
}

/// Start a DELETE from the dataset type `T`.
pub fn delete<T: 'static>() -> Delete {
    Delete::of::<T>()
}

/// Start a DELETE from a literal dataset name.
pub fn delete_from(table: impl Into<String>) -> Delete {
    Delete::of_token(table)
}

/// Start a WITH block from its first CTE definition.
///
/// Panics if the name is empty.
pub fn with(name: impl Into<String>, body: Select) -> With {
    With::new(name, body)
}

/// Start a DECLARE statement for a typed variable.
///
/// Panics if the name is empty.
pub fn declare(name: impl Into<String>, ty: TypeExpr) -> Declare {
    Declare::new(name, ty)
}

/// Start a SET variable-assignment statement.
///
/// Panics if the name is empty.
pub fn set_var(name: impl Into<String>, value: impl Into<Expr>) -> SetVar {
    SetVar::new(name, value)
}

/// Start an IF/ELSE block from its condition.
pub fn if_(cond: impl Into<Expr>) -> If {
    If::new(cond)
}

/// Any complete statement, for positions that accept more than one kind:
/// WITH terminals and IF branches.
#[derive(Debug, Clone)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
    With(With),
    Declare(Declare),
    SetVar(SetVar),
    If(Box<If>),
}

impl Statement {
    /// Render to a string with default options.
    pub fn build(&self) -> BuildResult<String> {
        self.build_with(CompileOptions::NONE)
    }

    /// Render to a string with explicit options.
    pub fn build_with(&self, opts: CompileOptions) -> BuildResult<String> {
        let mut buf = String::new();
        self.compile_into(&mut buf, opts)?;
        opts.apply_tail(&mut buf);
        Ok(buf)
    }

    pub(crate) fn compile_into(&self, buf: &mut String, opts: CompileOptions) -> BuildResult<()> {
        match self {
            Statement::Select(s) => s.compile_into(buf, opts),
            Statement::Insert(s) => s.compile_into(buf, opts),
            Statement::Update(s) => s.compile_into(buf, opts),
            Statement::Delete(s) => s.compile_into(buf, opts),
            Statement::With(s) => s.compile_into(buf, opts),
            Statement::Declare(s) => s.compile_into(buf, opts),
            Statement::SetVar(s) => s.compile_into(buf, opts),
            Statement::If(s) => s.compile_into(buf, opts),
        }
    }
}

impl From<Select> for Statement {
    fn from(s: Select) -> Self {
        Statement::Select(s)
    }
}

impl From<Insert> for Statement {
    fn from(s: Insert) -> Self {
        Statement::Insert(s)
    }
}

impl From<Update> for Statement {
    fn from(s: Update) -> Self {
        Statement::Update(s)
    }
}

impl From<Delete> for Statement {
    fn from(s: Delete) -> Self {
        Statement::Delete(s)
    }
}

impl From<With> for Statement {
    fn from(s: With) -> Self {
        Statement::With(s)
    }
}

impl From<Declare> for Statement {
    fn from(s: Declare) -> Self {
        Statement::Declare(s)
    }
}

impl From<SetVar> for Statement {
    fn from(s: SetVar) -> Self {
        Statement::SetVar(s)
    }
}

impl From<If> for Statement {
    fn from(s: If) -> Self {
        Statement::If(Box::new(s))
    }
}
