use async_trait::async_trait;

use crate::product::{CreateProduct, Product, UpdateProduct};

use super::{PageParams, Result};

/// Repository for product operations.
///
/// The store is the source of truth: it assigns ids and timestamps on
/// create, preserves `created_at` across updates, and reports `NotFound`
/// distinctly from other failures so callers can react to each.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Creates a new product, assigning its id and timestamps.
    async fn create(&self, product: CreateProduct) -> Result<Product>;

    /// Gets a product by its id.
    async fn find_by_id(&self, id: &str) -> Result<Product>;

    /// Replaces the stored product's domain fields, refreshing `updated_at`.
    /// Returns the stored record after the replace.
    async fn update(&self, id: &str, product: UpdateProduct) -> Result<Product>;

    /// Deletes a product by its id.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Returns one page of products ordered by creation time, together with
    /// the total number of products in the store.
    async fn list(&self, params: PageParams) -> Result<(Vec<Product>, u64)>;
}
