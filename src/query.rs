//! Query Cache
//!
//! In-memory cache of backend responses shared across pages, keyed the same
//! way for every page (`["customers"]`, `["customers", id]`, `["fruits"]`).
//! Invalidating a key drops it and every key it prefixes, then bumps an epoch
//! signal so mounted resources re-run and refetch what they lost.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;

use leptos::prelude::*;
use serde::{de::DeserializeOwned, Serialize};

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Customers,
    Customer(u32),
    Fruits,
}

impl QueryKey {
    fn segments(&self) -> Vec<String> {
        match self {
            QueryKey::Customers => vec!["customers".to_string()],
            QueryKey::Customer(id) => vec!["customers".to_string(), id.to_string()],
            QueryKey::Fruits => vec!["fruits".to_string()],
        }
    }

    /// True if `other` starts with all of this key's segments
    pub fn is_prefix_of(&self, other: &QueryKey) -> bool {
        let mine = self.segments();
        let theirs = other.segments();
        theirs.len() >= mine.len() && theirs[..mine.len()] == mine[..]
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::Customers => write!(f, "[\"customers\"]"),
            QueryKey::Customer(id) => write!(f, "[\"customers\", {}]", id),
            QueryKey::Fruits => write!(f, "[\"fruits\"]"),
        }
    }
}

/// Plain map of cached JSON values
#[derive(Debug, Default)]
pub struct QueryStore {
    entries: HashMap<QueryKey, serde_json::Value>,
}

impl QueryStore {
    /// Cached value for `key`, if present and decodable as `T`
    pub fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let value = self.entries.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                log::warn!("cached {} did not decode: {}", key, e);
                None
            }
        }
    }

    pub fn insert<T: Serialize>(&mut self, key: QueryKey, value: &T) {
        match serde_json::to_value(value) {
            Ok(json) => {
                self.entries.insert(key, json);
            }
            Err(e) => log::warn!("not caching {}: {}", key, e),
        }
    }

    /// Drop `key` and every key it prefixes. Returns how many entries went.
    pub fn invalidate(&mut self, key: &QueryKey) -> usize {
        let before = self.entries.len();
        self.entries.retain(|cached, _| !key.is_prefix_of(cached));
        before - self.entries.len()
    }
}

/// Reactive handle over a [`QueryStore`], provided through context
#[derive(Clone, Copy)]
pub struct QueryClient {
    store: StoredValue<QueryStore>,
    epoch: RwSignal<u64>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            store: StoredValue::new(QueryStore::default()),
            epoch: RwSignal::new(0),
        }
    }

    /// Read inside a resource to refetch after invalidation. Every
    /// [`invalidate`](Self::invalidate) call bumps it once.
    pub fn epoch(&self) -> u64 {
        self.epoch.get()
    }

    /// Cached value for `key`, or the result of `fetcher`. Only successes are cached.
    pub async fn fetch<T, F, Fut>(self, key: QueryKey, fetcher: F) -> Result<T, ApiError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if let Some(hit) = self.store.with_value(|store| store.get::<T>(&key)) {
            log::debug!("cache hit {}", key);
            return Ok(hit);
        }
        let value = fetcher().await?;
        self.store.update_value(|store| store.insert(key, &value));
        Ok(value)
    }

    pub fn invalidate(&self, key: &QueryKey) {
        let mut removed = 0;
        self.store.update_value(|store| removed = store.invalidate(key));
        log::debug!("invalidated {} ({} entries)", key, removed);
        self.epoch.update(|e| *e += 1);
    }
}
