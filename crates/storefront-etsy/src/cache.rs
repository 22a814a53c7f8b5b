//! In-memory caches owned by an `EtsyClient`.
//!
//! Both caches live exactly as long as the client that owns them.

use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

/// Upper bound on cached responses before expired entries are swept.
const MAX_ENTRIES: usize = 256;

/// Resolved shop id, set at most once.
///
/// Concurrent first callers may each resolve the id; the first stored value
/// wins and every caller observes it afterwards.
#[derive(Debug, Default)]
pub struct ShopIdCache {
    cell: OnceLock<u64>,
}

impl ShopIdCache {
    pub fn get(&self) -> Option<u64> {
        self.cell.get().copied()
    }

    /// Store a resolved id and return the id that is now cached.
    pub fn store(&self, shop_id: u64) -> u64 {
        let _ = self.cell.set(shop_id);
        self.get().unwrap_or(shop_id)
    }
}

#[derive(Debug, Clone)]
struct Entry {
    body: String,
    expires_at: Instant,
}

/// Successful response bodies keyed by request path.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl ResponseCache {
    /// Cached body for `key`, if present and not expired.
    pub async fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.body.clone())
    }

    /// Cache `body` under `key` for `ttl`. A zero TTL stores nothing.
    pub async fn insert(&self, key: &str, body: String, ttl: Duration) {
        if ttl.is_zero() {
            return;
        }

        let now = Instant::now();
        let mut entries = self.entries.write().await;
        if entries.len() >= MAX_ENTRIES && !entries.contains_key(key) {
            entries.retain(|_, entry| entry.expires_at > now);
            if entries.len() >= MAX_ENTRIES {
                entries.clear();
            }
        }
        entries.insert(
            key.to_string(),
            Entry {
                body,
                expires_at: now + ttl,
            },
        );
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
