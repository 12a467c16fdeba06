//! Cache key construction for product and listing entries.
//!
//! Product snapshots and listing pages live under distinct prefixes so a
//! list-changing mutation can drop every cached page without touching the
//! individually cached products.

/// Prefix shared by all cached listing pages.
pub const LIST_KEY_PREFIX: &str = "list:";

/// Returns the cache key for a single product.
pub fn product_key(product_id: &str) -> String {
    format!("product:{product_id}")
}

/// Returns the cache key for one listing page.
pub fn list_key(page: u32, limit: u32) -> String {
    format!("{LIST_KEY_PREFIX}{page}:{limit}")
}

/// Checks if a cache key is a listing-page key.
pub fn is_list_key(key: &str) -> bool {
    key.starts_with(LIST_KEY_PREFIX)
}
