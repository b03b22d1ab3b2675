//! Read cache keyed by query path
//!
//! Entries are stored as raw JSON and decoded on every hit. A key is
//! invalidated by itself and by any of its parent paths, so invalidating
//! `/api/sponsors` also drops `/api/sponsors/s1/deliverables`.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

#[derive(Debug, Default)]
pub struct QueryCache {
    entries: RwLock<HashMap<String, Value>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `key`; a stale shape counts as a miss
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.entries.read().get(key).cloned()?;
        serde_json::from_value(value).ok()
    }

    pub fn insert<T: Serialize>(&self, key: impl Into<String>, value: &T) {
        match serde_json::to_value(value) {
            Ok(v) => {
                self.entries.write().insert(key.into(), v);
            }
            Err(e) => tracing::warn!(error = %e, "Skipping cache insert"),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Drop every entry at or below each of `prefixes`
    pub fn invalidate(&self, prefixes: &[&str]) {
        self.entries
            .write()
            .retain(|key, _| !prefixes.iter().any(|p| is_under(key, p)));
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

fn is_under(key: &str, prefix: &str) -> bool {
    key == prefix
        || key
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}
