//! Dataset identities.
//!
//! A dataset is anything a statement can read from or write to: a table,
//! a view, or a CTE. Type-keyed datasets carry the Rust type that models
//! the dataset, so alias assignment and name conversion can key off the
//! type identity instead of a string.

use std::any::TypeId;

/// Identity of a Rust type used as a dataset or SQL type marker.
///
/// Captures the `TypeId` together with the type's simple name (the last
/// path segment, generics stripped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
}

impl TypeInfo {
    /// Capture the identity of `T`.
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: simple_name(std::any::type_name::<T>()),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The type's simple name, e.g. `Order` for `my_app::model::Order`.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Strip the module path and any generic arguments from a type name.
fn simple_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// A reference to a dataset, either by Rust type or by literal token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// Keyed by a Rust type; name and alias resolve through converters.
    Type(TypeInfo),
    /// A literal name, used verbatim (CTE names, ad-hoc tables).
    Token(String),
}

impl Dataset {
    pub fn of<T: 'static>() -> Self {
        Dataset::Type(TypeInfo::of::<T>())
    }

    pub fn token(name: impl Into<String>) -> Self {
        Dataset::Token(name.into())
    }
}
