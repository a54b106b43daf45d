//! # sqlcraft — fluent SQL statement construction
//!
//! > Build statements as expression trees, render them as text.
//!
//! Statements are assembled through fluent builders into clause-positioned
//! expression nodes, then compiled to canonical SQL. Clause order in the
//! output never depends on call order, aliases resolve themselves, and one
//! AST serves any dialect through compiler-installed name converters.
//!
//! ## Quick Example
//!
//! ```
//! use sqlcraft::prelude::*;
//!
//! struct Order;
//!
//! let sql = select::<Order>()
//!     .columns(["id", "status"])
//!     .filter(eq("status", "open"))
//!     .order_desc("id")
//!     .limit(10)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     sql,
//!     "SELECT id, status FROM Order O WHERE status = 'open' ORDER BY id DESC LIMIT 10"
//! );
//! ```
//!
//! ## Layers
//!
//! | Module     | Role                                      |
//! |------------|-------------------------------------------|
//! | `ast`      | Expression nodes and free builder functions |
//! | `builder`  | Statement builders and entry points       |
//! | `compiler` | Compiler trait, options, canonical renderer |
//! | `cache`    | Named compiled-statement cache            |

pub mod ast;
pub mod builder;
pub mod cache;
pub mod compiler;
pub mod error;

pub mod prelude {
    pub use crate::ast::builders::*;
    pub use crate::ast::*;
    pub use crate::builder::{
        declare, delete, delete_from, if_, insert, insert_into, select, select_from, set_var,
        update, update_table, with,
    };
    pub use crate::builder::{
        AliasTable, Declare, Delete, If, Insert, Select, SetVar, Statement, Update, With,
    };
    pub use crate::cache::QueryCache;
    pub use crate::compiler::{CompileOptions, Compiler, GenericCompiler};
    pub use crate::error::{BuildError, BuildResult};
}
