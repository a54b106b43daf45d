//! Expression node set.
//!
//! Every fragment of a statement is an [`Expr`]: column and table
//! references, literals, comparisons, joins, CASE expressions, and the
//! trailing statement modifiers. Builders place these nodes into clause
//! positions; the compiler renders them back out as SQL text.

use crate::ast::conditions::{Condition, ConditionGroup, FullCondition};
use crate::ast::datasets::{Dataset, TypeInfo};
use crate::ast::joins::JoinExpr;
use crate::ast::operators::{Operator, SortOrder};
use crate::ast::values::Value;
use crate::builder::Select;

/// A column reference, optionally qualified by a dataset.
///
/// Qualified references render as `alias.name` through the statement's
/// alias table. The name `*` renders as a star and bypasses the
/// object-name converter.
#[derive(Debug, Clone)]
pub struct ColumnExpr {
    pub dataset: Option<Dataset>,
    pub name: String,
}

/// A dataset reference for FROM/JOIN positions.
///
/// `alias` overrides the resolver for this occurrence; token datasets only
/// carry an alias when one is set explicitly.
#[derive(Debug, Clone)]
pub struct TableExpr {
    pub dataset: Dataset,
    pub alias: Option<String>,
}

impl TableExpr {
    pub fn of<T: 'static>() -> Self {
        Self {
            dataset: Dataset::of::<T>(),
            alias: None,
        }
    }

    pub fn token(name: impl Into<String>) -> Self {
        Self {
            dataset: Dataset::token(name),
            alias: None,
        }
    }
}

/// A SQL type reference, resolved through the compiler's type converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeExpr {
    pub info: TypeInfo,
    pub len: Option<u32>,
}

impl TypeExpr {
    pub fn of<T: 'static>() -> Self {
        Self {
            info: TypeInfo::of::<T>(),
            len: None,
        }
    }

    /// Attach a length argument, e.g. VARCHAR(80).
    pub fn with_len(mut self, len: u32) -> Self {
        self.len = Some(len);
        self
    }
}

/// A CASE expression: ordered WHEN/THEN branches plus an optional ELSE.
#[derive(Debug, Clone, Default)]
pub struct CaseExpr {
    pub branches: Vec<(Expr, Expr)>,
    pub default: Option<Box<Expr>>,
}

/// An expression node.
#[derive(Debug, Clone)]
pub enum Expr {
    /// Column reference
    Column(ColumnExpr),
    /// Dataset reference (FROM/JOIN target)
    Table(TableExpr),
    /// Literal or parameter
    Value(Value),
    /// Bare operator token
    Op(Operator),
    /// Raw SQL fragment, emitted verbatim
    Raw(String),
    /// Structural placeholder; renders to nothing and is skipped by lists
    NoOp,
    /// Single comparison
    Compare(Condition),
    /// Condition group
    Group(ConditionGroup),
    /// Arbitrary expression with condition semantics
    Full(FullCondition),
    /// Join clause
    Join(JoinExpr),
    /// CASE expression
    Case(CaseExpr),
    /// SQL type reference
    Type(TypeExpr),
    /// ORDER BY item
    Ordering { expr: Box<Expr>, dir: SortOrder },
    /// `column = value` assignment (UPDATE SET, SET statements)
    Assign { column: Box<Expr>, value: Box<Expr> },
    /// Parenthesized tuple (INSERT VALUES row, IN list)
    Row(Vec<Expr>),
    /// CAST(expr AS type)
    Cast { expr: Box<Expr>, target: TypeExpr },
    /// Function call, e.g. COALESCE(a, b)
    FunctionCall { name: String, args: Vec<Expr> },
    /// `expr AS alias`
    Aliased { expr: Box<Expr>, alias: String },
    /// Parenthesized nested SELECT
    Subquery(Box<Select>),
    /// Trailing set operation: UNION [ALL] with another SELECT
    Union { all: bool, query: Box<Select> },
    /// LIMIT n
    Limit(u64),
    /// OFFSET n
    Offset(u64),
    /// FOR UPDATE row locking
    ForUpdate,
    /// RETURNING list
    Returning(Vec<Expr>),
}

impl Expr {
    /// True when this node renders to nothing: a [`Expr::NoOp`] or a group
    /// with no renderable content.
    pub fn is_noop(&self) -> bool {
        match self {
            Expr::NoOp => true,
            Expr::Group(g) => g.is_empty(),
            _ => false,
        }
    }

    /// The trailing chain link, for nodes that participate in condition
    /// chains.
    pub fn chain_link(&self) -> Option<crate::ast::operators::LogicOp> {
        match self {
            Expr::Compare(c) => c.link,
            Expr::Group(g) => g.link,
            Expr::Full(f) => f.link,
            _ => None,
        }
    }
}

impl From<Value> for Expr {
    fn from(v: Value) -> Self {
        Expr::Value(v)
    }
}

impl From<Condition> for Expr {
    fn from(c: Condition) -> Self {
        Expr::Compare(c)
    }
}

impl From<ConditionGroup> for Expr {
    fn from(g: ConditionGroup) -> Self {
        Expr::Group(g)
    }
}

impl From<FullCondition> for Expr {
    fn from(f: FullCondition) -> Self {
        Expr::Full(f)
    }
}

impl From<JoinExpr> for Expr {
    fn from(j: JoinExpr) -> Self {
        Expr::Join(j)
    }
}

impl From<ColumnExpr> for Expr {
    fn from(c: ColumnExpr) -> Self {
        Expr::Column(c)
    }
}

impl From<TableExpr> for Expr {
    fn from(t: TableExpr) -> Self {
        Expr::Table(t)
    }
}

impl From<Select> for Expr {
    fn from(s: Select) -> Self {
        Expr::Subquery(Box::new(s))
    }
}

impl From<bool> for Expr {
    fn from(b: bool) -> Self {
        Expr::Value(Value::Bool(b))
    }
}

impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        Expr::Value(Value::Int(n as i64))
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Expr::Value(Value::Int(n))
    }
}

impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        Expr::Value(Value::Float(n))
    }
}

impl From<&str> for Expr {
    fn from(s: &str) -> Self {
        Expr::Value(Value::Text(s.to_string()))
    }
}

impl From<String> for Expr {
    fn from(s: String) -> Self {
        Expr::Value(Value::Text(s))
    }
}
