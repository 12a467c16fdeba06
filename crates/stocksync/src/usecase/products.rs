//! Product access coordinator.
//!
//! Implements the read-through / write-through policy between the cache and
//! the store. The ordering guarantee is that a store mutation always
//! precedes the corresponding cache mutation, so the cache is never ahead
//! of the store. Cache failures are logged and contained; the cache is
//! always re-derivable from the store.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use stocksync_core::cache::ProductCache;
use stocksync_core::product::{CreateProduct, Product, UpdateProduct};
use stocksync_core::storage::{
    PageParams, ProductRepository, RepositoryError, Result as StorageResult, MAX_PAGE_LIMIT,
};

use super::UseCaseError;

/// Coordinates every product read/write between the cache and the store.
///
/// Reads are cache-first with the store as fallback; writes go to the store
/// first and only mirror into the cache on success. No cache lock is held
/// across a store call, and every store call is bounded by a timeout.
pub struct ProductUseCase {
    repository: Arc<dyn ProductRepository>,
    cache: Arc<dyn ProductCache>,
    store_timeout: Duration,
    bulk_load_limit: usize,
}

impl ProductUseCase {
    /// Creates a new use case around the given store and cache.
    ///
    /// # Arguments
    ///
    /// * `repository` - The backing store (source of truth)
    /// * `cache` - The product cache
    /// * `store_timeout` - Upper bound on any single store call
    /// * `bulk_load_limit` - Maximum products fetched by [`Self::bulk_load`]
    pub fn new(
        repository: Arc<dyn ProductRepository>,
        cache: Arc<dyn ProductCache>,
        store_timeout: Duration,
        bulk_load_limit: usize,
    ) -> Self {
        Self {
            repository,
            cache,
            store_timeout,
            bulk_load_limit,
        }
    }

    /// Creates a product: store first, then cache.
    ///
    /// On store failure nothing is cached, so cache and store stay
    /// consistent (both miss the product). On success the new product is
    /// cached and every listing page is invalidated, since a new product
    /// can shift any page's membership and count.
    pub async fn create(&self, request: CreateProduct) -> Result<Product, UseCaseError> {
        request.validate()?;

        let product = self.store_call(self.repository.create(request)).await?;

        if let Err(err) = self.cache.set_product(&product).await {
            tracing::warn!(product_id = %product.id, error = %err, "Failed to cache new product");
        }
        if let Err(err) = self.cache.invalidate_lists().await {
            tracing::warn!(error = %err, "Failed to invalidate listing cache");
        }

        tracing::debug!(product_id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Gets a product by id, cache-first.
    ///
    /// A hit returns without touching the store. A miss falls through to
    /// the store; store errors (including `NotFound`) propagate as-is.
    /// Absence is never cached - only presence is memoized.
    pub async fn get_by_id(&self, id: &str) -> Result<Product, UseCaseError> {
        match self.cache.get_product(id).await {
            Ok(Some(product)) => {
                tracing::trace!(product_id = %id, "Cache hit for product");
                return Ok(product);
            }
            Ok(None) => tracing::trace!(product_id = %id, "Cache miss for product"),
            Err(err) => {
                tracing::warn!(product_id = %id, error = %err, "Cache read failed, treating as miss");
            }
        }

        let product = self.store_call(self.repository.find_by_id(id)).await?;

        if let Err(err) = self.cache.set_product(&product).await {
            tracing::warn!(product_id = %id, error = %err, "Failed to cache product");
        }
        Ok(product)
    }

    /// Replaces a product: store first, then cache.
    ///
    /// On success the cache entry is overwritten and listing pages are
    /// invalidated (a field change can affect any paginated view). On store
    /// failure the cache is left untouched; a previously cached pre-update
    /// snapshot may be served until the next successful write or TTL expiry.
    /// That staleness window is accepted, not masked.
    pub async fn update(&self, id: &str, request: UpdateProduct) -> Result<Product, UseCaseError> {
        request.validate()?;

        let product = self.store_call(self.repository.update(id, request)).await?;

        if let Err(err) = self.cache.set_product(&product).await {
            tracing::warn!(product_id = %id, error = %err, "Failed to refresh cached product");
        }
        if let Err(err) = self.cache.invalidate_lists().await {
            tracing::warn!(error = %err, "Failed to invalidate listing cache");
        }

        tracing::debug!(product_id = %id, "Product updated");
        Ok(product)
    }

    /// Deletes a product: store first, then cache.
    ///
    /// The cache-side removal also drops every listing page.
    pub async fn delete(&self, id: &str) -> Result<(), UseCaseError> {
        self.store_call(self.repository.delete(id)).await?;

        if let Err(err) = self.cache.delete_product(id).await {
            tracing::warn!(product_id = %id, error = %err, "Failed to invalidate deleted product");
        }

        tracing::debug!(product_id = %id, "Product deleted");
        Ok(())
    }

    /// Lists one page of products with the total product count.
    ///
    /// Page content is cache-first, but the total is always fetched fresh
    /// from the store - even on a page hit - because mutations elsewhere
    /// change the total without invalidating this page's cached rows. Page
    /// content may be briefly stale; the reported total never is.
    pub async fn list(&self, params: PageParams) -> Result<(Vec<Product>, u64), UseCaseError> {
        let (page, limit) = (params.page(), params.limit());

        let cached = match self.cache.get_list(page, limit).await {
            Ok(hit) => hit,
            Err(err) => {
                tracing::warn!(page, limit, error = %err, "Cache read failed, treating as miss");
                None
            }
        };

        if let Some(products) = cached {
            tracing::trace!(page, limit, "Cache hit for product list");
            let (_, total) = self.store_call(self.repository.list(params)).await?;
            return Ok((products, total));
        }

        tracing::trace!(page, limit, "Cache miss for product list");
        let (products, total) = self.store_call(self.repository.list(params)).await?;

        if let Err(err) = self.cache.set_list(page, limit, &products).await {
            tracing::warn!(page, limit, error = %err, "Failed to cache product list");
        }
        Ok((products, total))
    }

    /// Bulk-loads the cache from the store.
    ///
    /// Pages through the store until exhaustion or the configured bound,
    /// then atomically replaces the cache contents with the fetched
    /// products. Any store failure aborts before the cache is mutated,
    /// leaving the previous cache state intact. Returns the number of
    /// products loaded.
    pub async fn bulk_load(&self) -> Result<usize, UseCaseError> {
        let mut all: Vec<Product> = Vec::new();
        let mut page = 1u32;

        loop {
            let params = PageParams::new(page, MAX_PAGE_LIMIT)
                .map_err(|err| RepositoryError::InvalidData(err.to_string()))?;
            let (rows, _) = self.store_call(self.repository.list(params)).await?;
            let fetched = rows.len();
            all.extend(rows);

            if fetched < MAX_PAGE_LIMIT as usize || all.len() >= self.bulk_load_limit {
                break;
            }
            page += 1;
        }
        all.truncate(self.bulk_load_limit);

        if let Err(err) = self.cache.load_all(&all).await {
            tracing::warn!(error = %err, "Failed to reload cache from store");
            return Ok(0);
        }

        tracing::info!(products = all.len(), "Cache initialized/refreshed from store");
        Ok(all.len())
    }

    /// Runs a store call with the configured timeout.
    ///
    /// A timeout surfaces as an error to the caller, never as a hang.
    async fn store_call<T>(
        &self,
        call: impl Future<Output = StorageResult<T>>,
    ) -> StorageResult<T> {
        match tokio::time::timeout(self.store_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(RepositoryError::Timeout(format!(
                "{:?}",
                self.store_timeout
            ))),
        }
    }
}
