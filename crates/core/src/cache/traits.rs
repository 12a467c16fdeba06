use async_trait::async_trait;

use crate::product::Product;

use super::Result;

/// Trait for the product cache.
///
/// The cache holds individual product snapshots and listing-page snapshots
/// under separate key prefixes. Both are inserted with the backend's default
/// TTL; expired entries behave as misses. The cache is never the source of
/// truth - entries are always repopulated from the store on a miss.
#[async_trait]
pub trait ProductCache: Send + Sync {
    /// Gets a cached product. Returns `None` if absent or expired.
    async fn get_product(&self, id: &str) -> Result<Option<Product>>;

    /// Inserts or overwrites a product snapshot, resetting its expiration.
    async fn set_product(&self, product: &Product) -> Result<()>;

    /// Removes a product snapshot. As a side effect every cached listing
    /// page is also dropped, since a deletion changes page membership and
    /// the total count.
    async fn delete_product(&self, id: &str) -> Result<()>;

    /// Gets one cached listing page. Returns `None` if absent or expired.
    async fn get_list(&self, page: u32, limit: u32) -> Result<Option<Vec<Product>>>;

    /// Caches one listing page with the default TTL.
    async fn set_list(&self, page: u32, limit: u32, products: &[Product]) -> Result<()>;

    /// Removes every listing-page entry, leaving product entries untouched.
    async fn invalidate_lists(&self) -> Result<()>;

    /// Atomically clears the entire cache and repopulates product entries
    /// only. Listing pages are intentionally left cold and rebuild lazily
    /// on the next read.
    async fn load_all(&self, products: &[Product]) -> Result<()>;
}
