//! Time-bounded cache service.
//!
//! Injected wherever a read path is cache-fronted (site settings, catalog
//! pages) so that cache lifetime and invalidation are explicit rather than
//! ambient process state.

use std::{
    collections::HashMap,
    hash::Hash,
    time::{Duration, Instant},
};

use tokio::sync::RwLock;

#[derive(Debug)]
struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// A keyed cache whose entries expire after a fixed TTL.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: RwLock<HashMap<K, Entry<V>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a live entry. Expired entries read as absent.
    pub async fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;

        if entry.expires_at <= Instant::now() {
            return None;
        }

        Some(entry.value.clone())
    }

    /// Store a value, replacing any previous entry and restarting its TTL.
    pub async fn insert(&self, key: K, value: V) {
        let expires_at = Instant::now() + self.ttl;

        self.entries
            .write()
            .await
            .insert(key, Entry { value, expires_at });
    }

    /// Drop a single entry so the next lookup goes back to the source.
    pub async fn invalidate(&self, key: &K) {
        self.entries.write().await.remove(key);
    }

    /// Drop every entry.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_returns_inserted_value() {
        let cache = TtlCache::new(Duration::from_secs(60));

        cache.insert("key".to_string(), 42_u32).await;

        assert_eq!(cache.get(&"key".to_string()).await, Some(42));
    }

    #[tokio::test]
    async fn get_returns_none_for_missing_key() {
        let cache: TtlCache<String, u32> = TtlCache::new(Duration::from_secs(60));

        assert_eq!(cache.get(&"missing".to_string()).await, None);
    }

    #[tokio::test]
    async fn expired_entry_reads_as_absent() {
        let cache = TtlCache::new(Duration::ZERO);

        cache.insert("key".to_string(), 42_u32).await;

        assert_eq!(cache.get(&"key".to_string()).await, None);
    }

    #[tokio::test]
    async fn invalidate_removes_entry() {
        let cache = TtlCache::new(Duration::from_secs(60));

        cache.insert("key".to_string(), 42_u32).await;
        cache.invalidate(&"key".to_string()).await;

        assert_eq!(cache.get(&"key".to_string()).await, None);
    }

    #[tokio::test]
    async fn insert_restarts_ttl_and_replaces_value() {
        let cache = TtlCache::new(Duration::from_secs(60));

        cache.insert("key".to_string(), 1_u32).await;
        cache.insert("key".to_string(), 2_u32).await;

        assert_eq!(cache.get(&"key".to_string()).await, Some(2));
    }

    #[tokio::test]
    async fn clear_removes_all_entries() {
        let cache = TtlCache::new(Duration::from_secs(60));

        cache.insert("a".to_string(), 1_u32).await;
        cache.insert("b".to_string(), 2_u32).await;
        cache.clear().await;

        assert_eq!(cache.get(&"a".to_string()).await, None);
        assert_eq!(cache.get(&"b".to_string()).await, None);
    }
}
