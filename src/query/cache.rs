//! Keyed query cache
//!
//! Payloads are stored as JSON values so one cache can hold every record
//! type. Each write stamps the entry with a fresh version from a global
//! counter; readers compare versions to decide whether derived data needs
//! recomputing.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::key::QueryKey;
use super::retry::QueryOptions;
use crate::error::{FinanceError, FinanceResult};

#[derive(Debug, Clone)]
struct CacheEntry {
    data: Value,
    updated_at: Instant,
    invalidated: bool,
    version: u64,
}

impl CacheEntry {
    fn is_fresh(&self, options: &QueryOptions) -> bool {
        !self.invalidated && self.updated_at.elapsed() < options.stale_time
    }
}

#[derive(Default)]
pub struct QueryClient {
    entries: RwLock<HashMap<QueryKey, CacheEntry>>,
    fetch_locks: Mutex<HashMap<QueryKey, Arc<tokio::sync::Mutex<()>>>>,
    clock: AtomicU64,
}

fn poisoned() -> FinanceError {
    FinanceError::Config("query cache lock poisoned".into())
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `key` from cache while fresh, otherwise fetch with retries and store
    pub async fn fetch_query<T, F, Fut>(
        &self,
        key: &QueryKey,
        options: &QueryOptions,
        fetcher: F,
    ) -> FinanceResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: Fn() -> Fut,
        Fut: Future<Output = FinanceResult<T>>,
    {
        if let Some(hit) = self.fresh_data(key, options) {
            debug!(%key, "cache hit");
            return Ok(hit);
        }

        let lock = self.fetch_lock(key)?;
        let _in_flight = lock.lock().await;

        // Someone else may have filled the entry while we waited
        if let Some(hit) = self.fresh_data(key, options) {
            debug!(%key, "filled by concurrent fetch");
            return Ok(hit);
        }

        let mut failures = 0;
        let data = loop {
            match fetcher().await {
                Ok(data) => break data,
                Err(err) => {
                    failures += 1;
                    if !options.retry.should_retry(failures, &err) {
                        return Err(err);
                    }
                    warn!(%key, attempt = failures, error = %err, "fetch failed, retrying");
                    if !options.retry.delay.is_zero() {
                        tokio::time::sleep(options.retry.delay).await;
                    }
                }
            }
        };

        self.set_query_data(key, &data)?;
        Ok(data)
    }

    fn fresh_data<T: DeserializeOwned>(&self, key: &QueryKey, options: &QueryOptions) -> Option<T> {
        let entries = self.entries.read().ok()?;
        let entry = entries.get(key).filter(|e| e.is_fresh(options))?;
        serde_json::from_value(entry.data.clone()).ok()
    }

    fn fetch_lock(&self, key: &QueryKey) -> FinanceResult<Arc<tokio::sync::Mutex<()>>> {
        let mut locks = self.fetch_locks.lock().map_err(|_| poisoned())?;
        Ok(locks.entry(key.clone()).or_default().clone())
    }

    /// Cached value regardless of freshness
    pub fn get_query_data<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let entries = self.entries.read().ok()?;
        serde_json::from_value(entries.get(key)?.data.clone()).ok()
    }

    /// Write a value directly, marking it fresh
    pub fn set_query_data<T: Serialize + ?Sized>(&self, key: &QueryKey, data: &T) -> FinanceResult<()> {
        let data = serde_json::to_value(data)?;
        let version = self.clock.fetch_add(1, Ordering::SeqCst) + 1;
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.insert(
            key.clone(),
            CacheEntry {
                data,
                updated_at: Instant::now(),
                invalidated: false,
                version,
            },
        );
        Ok(())
    }

    /// Edit a cached value in place; returns false when nothing is cached
    pub fn update_query_data<T, F>(&self, key: &QueryKey, edit: F) -> FinanceResult<bool>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut T),
    {
        let Some(mut data) = self.get_query_data::<T>(key) else {
            return Ok(false);
        };
        edit(&mut data);
        self.set_query_data(key, &data)?;
        Ok(true)
    }

    /// Mark every entry under `prefix` stale; returns how many were hit
    pub fn invalidate_queries(&self, prefix: &QueryKey) -> usize {
        let Ok(mut entries) = self.entries.write() else {
            return 0;
        };
        let mut count = 0;
        for (key, entry) in entries.iter_mut() {
            if key.starts_with(prefix) {
                entry.invalidated = true;
                count += 1;
            }
        }
        if count > 0 {
            debug!(%prefix, count, "invalidated queries");
        }
        count
    }

    /// Drop every entry under `prefix`
    pub fn remove_queries(&self, prefix: &QueryKey) -> usize {
        let Ok(mut entries) = self.entries.write() else {
            return 0;
        };
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        before - entries.len()
    }

    /// Drop everything (sign-out, account deletion)
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    /// Version of the data under `key`, 0 when absent
    pub fn version(&self, key: &QueryKey) -> u64 {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).map(|e| e.version))
            .unwrap_or(0)
    }

    pub fn is_invalidated(&self, key: &QueryKey) -> bool {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).map(|e| e.invalidated))
            .unwrap_or(false)
    }
}
