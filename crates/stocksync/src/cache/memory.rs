//! In-memory cache implementation with TTL and LRU eviction.
//!
//! Thread-safe cache using tokio synchronization primitives. Every entry is
//! inserted with the cache-wide default TTL and becomes a miss once it
//! expires. Expired entries are removed lazily on read and proactively by a
//! periodic sweep, and an LRU bound caps total memory.
//!
//! Values are stored as JSON bytes so that a listing page is written and
//! read as one unit; a reader can never observe a half-written product.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::{watch, RwLock};

use stocksync_core::cache::{
    deserialize_product, deserialize_products, is_list_key, list_key, product_key,
    serialize_product, serialize_products, CacheError, ProductCache, Result,
};
use stocksync_core::product::Product;

/// A single cache entry with an absolute expiration time.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(value: Vec<u8>, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

/// In-memory product cache.
///
/// Clones share the same underlying store, so a clone can be handed to the
/// background sweeper while the original serves requests. Each trait
/// operation holds the lock for a single coherent critical section; no
/// store I/O ever happens under it.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
    ttl: Duration,
}

impl MemoryCache {
    /// Creates a new in-memory cache.
    ///
    /// # Arguments
    ///
    /// * `max_entries` - Maximum number of entries before LRU eviction kicks in.
    /// * `ttl` - Default time-to-live applied to every inserted entry.
    ///
    /// # Panics
    ///
    /// Panics if `max_entries` is 0.
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(max_entries).expect("max_entries must be > 0");
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
            ttl,
        }
    }

    /// Removes every expired entry, returning how many were evicted.
    pub async fn sweep(&self) -> usize {
        let mut store = self.store.write().await;
        let expired: Vec<String> = store
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            store.pop(key);
        }
        expired.len()
    }

    /// Periodic eviction sweep, run as a background task.
    ///
    /// Loops until shutdown is signalled. The sweep interval should be
    /// shorter than the TTL so expired entries do not pile up between
    /// sweeps.
    pub async fn run_sweeper(self, interval: Duration, mut shutdown: watch::Receiver<bool>) {
        loop {
            tokio::select! {
                _ = tokio::time::sleep(interval) => {
                    let removed = self.sweep().await;
                    if removed > 0 {
                        tracing::debug!(removed, "Evicted expired cache entries");
                    }
                }
                _ = shutdown.changed() => {
                    tracing::debug!("Stopping cache sweeper");
                    return;
                }
            }
        }
    }

    /// Returns the entry bytes for `key`, dropping it if it has expired.
    async fn get_bytes(&self, key: &str) -> Option<Vec<u8>> {
        let mut store = self.store.write().await;
        if store.peek(key).is_some_and(|entry| entry.is_expired()) {
            store.pop(key);
            return None;
        }
        store.get(key).map(|entry| entry.value.clone())
    }

    async fn put_bytes(&self, key: String, value: Vec<u8>) {
        let mut store = self.store.write().await;
        store.put(key, CacheEntry::new(value, self.ttl));
    }
}

#[async_trait]
impl ProductCache for MemoryCache {
    async fn get_product(&self, id: &str) -> Result<Option<Product>> {
        let Some(bytes) = self.get_bytes(&product_key(id)).await else {
            return Ok(None);
        };
        let product = deserialize_product(&bytes)
            .map_err(|e| CacheError::Serialization(e.to_string()))?;
        Ok(Some(product))
    }

    async fn set_product(&self, product: &Product) -> Result<()> {
        let bytes = serialize_product(product)
            .map_err(|e| CacheError::Serialization(e.to_string()))?;
        self.put_bytes(product_key(&product.id), bytes).await;
        Ok(())
    }

    async fn delete_product(&self, id: &str) -> Result<()> {
        let mut store = self.store.write().await;
        store.pop(&product_key(id));

        // A deleted product changes every page's membership and count, so
        // the listing snapshots go with it.
        let list_keys: Vec<String> = store
            .iter()
            .filter(|(key, _)| is_list_key(key))
            .map(|(key, _)| key.clone())
            .collect();
        for key in &list_keys {
            store.pop(key);
        }
        Ok(())
    }

    async fn get_list(&self, page: u32, limit: u32) -> Result<Option<Vec<Product>>> {
        let Some(bytes) = self.get_bytes(&list_key(page, limit)).await else {
            return Ok(None);
        };
        let products = deserialize_products(&bytes)
            .map_err(|e| CacheError::Serialization(e.to_string()))?;
        Ok(Some(products))
    }

    async fn set_list(&self, page: u32, limit: u32, products: &[Product]) -> Result<()> {
        let bytes = serialize_products(products)
            .map_err(|e| CacheError::Serialization(e.to_string()))?;
        self.put_bytes(list_key(page, limit), bytes).await;
        Ok(())
    }

    async fn invalidate_lists(&self) -> Result<()> {
        let mut store = self.store.write().await;
        let list_keys: Vec<String> = store
            .iter()
            .filter(|(key, _)| is_list_key(key))
            .map(|(key, _)| key.clone())
            .collect();
        for key in &list_keys {
            store.pop(key);
        }
        Ok(())
    }

    async fn load_all(&self, products: &[Product]) -> Result<()> {
        // Serialize outside the critical section; a failure here aborts
        // before anything is flushed.
        let mut entries = Vec::with_capacity(products.len());
        for product in products {
            let bytes = serialize_product(product)
                .map_err(|e| CacheError::Serialization(e.to_string()))?;
            entries.push((product_key(&product.id), bytes));
        }

        // Flush and repopulate under one write lock so concurrent readers
        // see either the old cache or the fully loaded one.
        let mut store = self.store.write().await;
        store.clear();
        for (key, bytes) in entries {
            store.put(key, CacheEntry::new(bytes, self.ttl));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    /// Default max entries for tests
    const TEST_MAX_ENTRIES: usize = 1000;

    fn test_cache(ttl: Duration) -> MemoryCache {
        MemoryCache::new(TEST_MAX_ENTRIES, ttl)
    }

    fn test_product(id: &str, price: f64) -> Product {
        let timestamp = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            description: "A test product".to_string(),
            price,
            quantity: 5,
            category: "test".to_string(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    #[tokio::test]
    async fn test_set_and_get_product() {
        let cache = test_cache(Duration::from_secs(60));
        let product = test_product("p-1", 10.0);

        cache.set_product(&product).await.unwrap();
        let result = cache.get_product("p-1").await.unwrap();

        assert_eq!(result, Some(product));
    }

    #[tokio::test]
    async fn test_get_nonexistent_product() {
        let cache = test_cache(Duration::from_secs(60));
        assert_eq!(cache.get_product("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_overwrite_product() {
        let cache = test_cache(Duration::from_secs(60));

        cache.set_product(&test_product("p-1", 10.0)).await.unwrap();
        cache.set_product(&test_product("p-1", 12.0)).await.unwrap();

        let result = cache.get_product("p-1").await.unwrap().unwrap();
        assert_eq!(result.price, 12.0);
    }

    #[tokio::test]
    async fn test_set_and_get_list() {
        let cache = test_cache(Duration::from_secs(60));
        let products = vec![test_product("p-1", 10.0), test_product("p-2", 20.0)];

        cache.set_list(1, 20, &products).await.unwrap();
        let result = cache.get_list(1, 20).await.unwrap();

        assert_eq!(result, Some(products));
    }

    #[tokio::test]
    async fn test_list_pages_are_keyed_by_page_and_limit() {
        let cache = test_cache(Duration::from_secs(60));
        cache
            .set_list(1, 20, &[test_product("p-1", 10.0)])
            .await
            .unwrap();

        assert!(cache.get_list(2, 20).await.unwrap().is_none());
        assert!(cache.get_list(1, 50).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_product_drops_all_list_pages() {
        let cache = test_cache(Duration::from_secs(60));
        let p1 = test_product("p-1", 10.0);
        let p2 = test_product("p-2", 20.0);

        cache.set_product(&p1).await.unwrap();
        cache.set_product(&p2).await.unwrap();
        cache.set_list(1, 20, &[p1.clone(), p2.clone()]).await.unwrap();
        cache.set_list(2, 20, &[]).await.unwrap();

        cache.delete_product("p-1").await.unwrap();

        assert!(cache.get_product("p-1").await.unwrap().is_none());
        assert!(cache.get_list(1, 20).await.unwrap().is_none());
        assert!(cache.get_list(2, 20).await.unwrap().is_none());
        // The other product entry is untouched
        assert_eq!(cache.get_product("p-2").await.unwrap(), Some(p2));
    }

    #[tokio::test]
    async fn test_invalidate_lists_leaves_products() {
        let cache = test_cache(Duration::from_secs(60));
        let product = test_product("p-1", 10.0);

        cache.set_product(&product).await.unwrap();
        cache.set_list(1, 20, &[product.clone()]).await.unwrap();

        cache.invalidate_lists().await.unwrap();

        assert!(cache.get_list(1, 20).await.unwrap().is_none());
        assert_eq!(cache.get_product("p-1").await.unwrap(), Some(product));
    }

    #[tokio::test]
    async fn test_load_all_replaces_products_and_clears_lists() {
        let cache = test_cache(Duration::from_secs(60));

        cache.set_product(&test_product("old", 1.0)).await.unwrap();
        cache
            .set_list(1, 20, &[test_product("old", 1.0)])
            .await
            .unwrap();

        let fresh = vec![test_product("p-1", 10.0), test_product("p-2", 20.0)];
        cache.load_all(&fresh).await.unwrap();

        // Old entries are gone, fresh products are cached, lists stay cold
        assert!(cache.get_product("old").await.unwrap().is_none());
        assert!(cache.get_list(1, 20).await.unwrap().is_none());
        assert_eq!(cache.get_product("p-1").await.unwrap(), Some(fresh[0].clone()));
        assert_eq!(cache.get_product("p-2").await.unwrap(), Some(fresh[1].clone()));
    }

    #[tokio::test]
    async fn test_ttl_expiration() {
        let cache = test_cache(Duration::from_millis(50));

        cache.set_product(&test_product("p-1", 10.0)).await.unwrap();
        assert!(cache.get_product("p-1").await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(cache.get_product("p-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_resets_expiration() {
        let cache = test_cache(Duration::from_millis(80));

        cache.set_product(&test_product("p-1", 10.0)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        // Overwriting restarts the clock for the entry
        cache.set_product(&test_product("p-1", 12.0)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(cache.get_product("p-1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_sweep_removes_expired_entries() {
        let cache = test_cache(Duration::from_millis(30));

        cache.set_product(&test_product("p-1", 10.0)).await.unwrap();
        cache.set_list(1, 20, &[test_product("p-1", 10.0)]).await.unwrap();

        tokio::time::sleep(Duration::from_millis(60)).await;

        let removed = cache.sweep().await;
        assert_eq!(removed, 2);
        assert_eq!(cache.sweep().await, 0);
    }

    #[tokio::test]
    async fn test_sweeper_stops_on_shutdown() {
        let cache = test_cache(Duration::from_secs(60));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(
            cache
                .clone()
                .run_sweeper(Duration::from_millis(10), shutdown_rx),
        );

        shutdown_tx.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("sweeper should stop promptly")
            .unwrap();
    }

    #[tokio::test]
    async fn test_lru_eviction() {
        // Create a cache with only 3 entries max
        let cache = MemoryCache::new(3, Duration::from_secs(60));

        cache.set_product(&test_product("p-1", 1.0)).await.unwrap();
        cache.set_product(&test_product("p-2", 2.0)).await.unwrap();
        cache.set_product(&test_product("p-3", 3.0)).await.unwrap();

        // Access p-1 to make it recently used
        cache.get_product("p-1").await.unwrap();

        // Inserting a 4th entry evicts p-2 (least recently used)
        cache.set_product(&test_product("p-4", 4.0)).await.unwrap();

        assert!(cache.get_product("p-1").await.unwrap().is_some());
        assert!(cache.get_product("p-2").await.unwrap().is_none());
        assert!(cache.get_product("p-3").await.unwrap().is_some());
        assert!(cache.get_product("p-4").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_concurrent_reads_during_load_all_see_whole_products() {
        let cache = test_cache(Duration::from_secs(60));
        let before = test_product("p-1", 10.0);
        let after = test_product("p-1", 99.0);

        cache.load_all(std::slice::from_ref(&before)).await.unwrap();

        // Readers hammer the cache while the loader flushes and repopulates
        // repeatedly; every observed product must be one of the two full
        // snapshots, never a mix.
        let reader_cache = cache.clone();
        let (before_r, after_r) = (before.clone(), after.clone());
        let reader = tokio::spawn(async move {
            for _ in 0..500 {
                if let Some(product) = reader_cache.get_product("p-1").await.unwrap() {
                    assert!(
                        product == before_r || product == after_r,
                        "observed a torn product snapshot"
                    );
                }
            }
        });

        for i in 0..100 {
            let snapshot = if i % 2 == 0 { &after } else { &before };
            cache.load_all(std::slice::from_ref(snapshot)).await.unwrap();
        }

        reader.await.unwrap();
    }

    #[tokio::test]
    #[should_panic(expected = "max_entries must be > 0")]
    async fn test_zero_max_entries_panics() {
        let _ = MemoryCache::new(0, Duration::from_secs(60));
    }
}
