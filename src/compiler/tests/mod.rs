//! Compiler test modules.
//!
//! Tests are organized by category:
//! - `core`: statement assembly per kind, build errors
//! - `clauses`: canonical ordering, trailing modifiers, options
//! - `conditions`: chains, groups, operators, CASE
//! - `aliases`: alias resolution and converter delegates
//! - `script`: WITH, DECLARE, SET, IF

mod aliases;
mod clauses;
mod conditions;
mod script;
