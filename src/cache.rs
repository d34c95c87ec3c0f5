//! Per-fetcher response cache
//!
//! Stores each fetcher's last successful result as a JSON file in a shared
//! temporary directory so repeated runs skip the API round trips. The cache
//! never expires on its own; `--force` is the only invalidation. A corrupt
//! entry is an error, not a cache miss - it aborts the run instead of
//! silently re-fetching.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::path::PathBuf;

pub struct Cache {
    dir: PathBuf,
}

impl Cache {
    /// Cache over the OS temp directory, shared across invocations.
    pub fn new() -> Self {
        Self::with_dir(std::env::temp_dir())
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Deterministic entry path, so repeated runs hit the same file.
    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("awsquery.{key}.json"))
    }

    /// Return the cached value for `key`, or run `fetch` and store its
    /// result. `force` bypasses the stored entry unconditionally. The entry
    /// is written once, only after `fetch` fully succeeded.
    ///
    /// No locking: concurrent runs with the same key race last-writer-wins.
    pub async fn get_or_fetch<T, F, Fut>(&self, key: &str, force: bool, fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let path = self.entry_path(key);

        if !force && path.exists() {
            tracing::debug!("cache hit for {} at {}", key, path.display());
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read cache entry {}", path.display()))?;
            return serde_json::from_str(&raw)
                .with_context(|| format!("Corrupt cache entry {}", path.display()));
        }

        tracing::debug!("fetching {} (force: {})", key, force);
        let value = fetch().await?;

        let raw = serde_json::to_string(&value).context("Failed to serialize cache entry")?;
        std::fs::write(&path, raw)
            .with_context(|| format!("Failed to write cache entry {}", path.display()))?;

        Ok(value)
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::new()
    }
}
