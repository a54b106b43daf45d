//! Named compiled-statement cache.
//!
//! Statements that never change shape can be compiled once and reused by
//! name. The cache guarantees at most one compilation per key under
//! concurrent access: the first requester compiles while concurrent
//! requesters for the same key wait for its result. Failed compilations
//! are not cached, so the next request retries.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use once_cell::sync::OnceCell;

use crate::error::BuildResult;

/// A concurrency-safe map from statement name to compiled SQL.
///
/// ```
/// use sqlcraft::builder::select;
/// use sqlcraft::cache::QueryCache;
///
/// struct Order;
///
/// let cache = QueryCache::new();
/// let sql = cache
///     .get_or_build("orders:all", || select::<Order>().build())
///     .unwrap();
/// assert_eq!(&*sql, "SELECT * FROM Order O");
/// ```
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<String, Arc<OnceCell<Arc<str>>>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `name`, compiling via `build` on first request.
    ///
    /// Concurrent first requests for the same key block on one winner's
    /// compilation instead of compiling twice. A failed `build` leaves the
    /// slot empty and returns the error to exactly the callers that
    /// observed it.
    pub fn get_or_build(
        &self,
        name: &str,
        build: impl FnOnce() -> BuildResult<String>,
    ) -> BuildResult<Arc<str>> {
        let cell = {
            let mut entries = self.lock();
            entries.entry(name.to_string()).or_default().clone()
        };
        if let Some(sql) = cell.get() {
            tracing::debug!("cache hit for '{}'", name);
            return Ok(sql.clone());
        }
        let sql = cell.get_or_try_init(|| {
            tracing::debug!("cache miss for '{}', compiling", name);
            build().map(Arc::from)
        })?;
        Ok(sql.clone())
    }

    /// Drop one entry. Returns whether it existed.
    pub fn invalidate(&self, name: &str) -> bool {
        self.lock().remove(name).is_some()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Arc<OnceCell<Arc<str>>>>> {
        // A poisoned map only means another thread panicked mid-insert;
        // the entries themselves stay usable.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
