//! Ergonomic builder functions for expression nodes.
//!
//! These helpers construct AST nodes without the verbosity of creating
//! structs directly.
//!
//! # Modules
//!
//! - `columns` - Column references
//! - `literals` - Literal values and parameters
//! - `functions` - Function calls, casts, raw fragments
//! - `conditions` - Conditions (eq, gt, like, exists, ...)
//! - `case_when` - CASE WHEN expressions
//! - `ext` - Extension methods on `Expr`
//!
//! # Example
//! ```ignore
//! use sqlcraft::prelude::*;
//!
//! let query = select::<Order>()
//!     .columns(["id", "status"])
//!     .column(case_when(eq("status", "open")).then(1).else_(0).aliased("is_open"))
//!     .filter(gt("total", 100).and())
//!     .filter(is_not_null("approved_at"))
//!     .order_desc("created_at")
//!     .limit(10);
//! ```

pub mod case_when;
pub mod columns;
pub mod conditions;
pub mod ext;
pub mod functions;
pub mod literals;

// Re-export everything for convenient `use sqlcraft::ast::builders::*;`

// Columns
pub use columns::{col, qcol, star, tcol};

// Literals
pub use literals::{named_param, null, param, val};

// Functions
pub use functions::{cast, func, raw, sql_type, sql_type_len};

// Conditions
pub use conditions::{
    between, cmp, eq, exists, group, gt, gte, ilike, is_in, is_not_null, is_null, like, lt, lte,
    ne, not_between, not_exists, not_in, not_like, raw_cond,
};

// CASE WHEN
pub use case_when::{case_when, CaseBuilder, CaseThen};

// Extension methods
pub use ext::ExprExt;
