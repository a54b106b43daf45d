//! Per-statement alias resolution.
//!
//! Aliases are keyed by dataset type identity. The first request for a
//! type assigns an alias automatically: the first character of the type's
//! simple name, suffixed with 1, 2, ... while the candidate collides
//! (case-insensitively) with an alias already in the table. Explicit
//! registrations always win, whether they land before or after the
//! automatic one.
//!
//! Assignment happens lazily while a statement renders, through `&self`,
//! so the table uses interior mutability. Builders are deliberately not
//! shared across threads.

use std::any::TypeId;
use std::cell::RefCell;
use std::collections::HashMap;

use crate::ast::datasets::TypeInfo;

#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    by_type: RefCell<HashMap<TypeId, String>>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an explicit alias for `T`, replacing any earlier
    /// assignment.
    ///
    /// Panics if the alias is empty.
    pub fn set<T: 'static>(&self, alias: impl Into<String>) {
        let alias = alias.into();
        assert!(!alias.is_empty(), "alias must not be empty");
        self.by_type.borrow_mut().insert(TypeId::of::<T>(), alias);
    }

    /// Register an explicit alias for an already-captured type identity.
    ///
    /// Panics if the alias is empty.
    pub fn set_info(&self, info: &TypeInfo, alias: impl Into<String>) {
        let alias = alias.into();
        assert!(!alias.is_empty(), "alias must not be empty");
        self.by_type.borrow_mut().insert(info.id(), alias);
    }

    /// Look up the alias for a dataset type, assigning one when absent.
    pub fn resolve(&self, info: &TypeInfo) -> String {
        let mut map = self.by_type.borrow_mut();
        if let Some(existing) = map.get(&info.id()) {
            return existing.clone();
        }
        let alias = next_free(&map, info.name());
        map.insert(info.id(), alias.clone());
        alias
    }

    /// The alias currently assigned to `T`, if any.
    pub fn get<T: 'static>(&self) -> Option<String> {
        self.by_type.borrow().get(&TypeId::of::<T>()).cloned()
    }

    pub fn len(&self) -> usize {
        self.by_type.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.borrow().is_empty()
    }
}

/// First character of the simple name, then the shortest numeric suffix
/// that avoids a case-insensitive collision with assigned aliases.
fn next_free(map: &HashMap<TypeId, String>, name: &str) -> String {
    let base: String = match name.chars().next() {
        Some(c) => c.to_string(),
        None => "t".to_string(),
    };
    let mut candidate = base.clone();
    let mut suffix = 1u32;
    while map.values().any(|v| v.eq_ignore_ascii_case(&candidate)) {
        candidate = format!("{base}{suffix}");
        suffix += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Order;
    struct Item;
    struct Offer;

    #[test]
    fn test_auto_assignment_suffixes_on_collision() {
        let table = AliasTable::new();
        assert_eq!(table.resolve(&TypeInfo::of::<Order>()), "O");
        assert_eq!(table.resolve(&TypeInfo::of::<Item>()), "I");
        assert_eq!(table.resolve(&TypeInfo::of::<Offer>()), "O1");
        // Repeated lookups are stable.
        assert_eq!(table.resolve(&TypeInfo::of::<Order>()), "O");
        assert_eq!(table.resolve(&TypeInfo::of::<Offer>()), "O1");
    }

    #[test]
    fn test_collision_check_is_case_insensitive() {
        struct Order2;
        let table = AliasTable::new();
        table.set::<Order>("o");
        assert_eq!(table.resolve(&TypeInfo::of::<Order2>()), "O1");
    }

    #[test]
    fn test_explicit_registration_wins() {
        let table = AliasTable::new();
        assert_eq!(table.resolve(&TypeInfo::of::<Order>()), "O");
        table.set::<Order>("ord");
        assert_eq!(table.resolve(&TypeInfo::of::<Order>()), "ord");
        assert_eq!(table.get::<Order>().as_deref(), Some("ord"));
    }
}
