//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use stocksync_core::product::{CreateProduct, Product, UpdateProduct};
use stocksync_core::storage::{PageParams, ProductRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access. The
/// repository assigns ids and timestamps on create, the same contract a
/// document store would fulfil. Data is not persisted and will be lost when
/// the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    products: Arc<RwLock<HashMap<String, Product>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    async fn create(&self, product: CreateProduct) -> Result<Product> {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
            category: product.category,
            created_at: now,
            updated_at: now,
        };

        let mut products = self.products.write().await;
        products.insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: &str) -> Result<Product> {
        let products = self.products.read().await;
        products
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::product_not_found(id))
    }

    async fn update(&self, id: &str, update: UpdateProduct) -> Result<Product> {
        let mut products = self.products.write().await;
        let stored = products
            .get_mut(id)
            .ok_or_else(|| RepositoryError::product_not_found(id))?;

        // Full replace of the domain fields; id and created_at are immutable.
        stored.name = update.name;
        stored.description = update.description;
        stored.price = update.price;
        stored.quantity = update.quantity;
        stored.category = update.category;
        stored.updated_at = Utc::now();

        Ok(stored.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut products = self.products.write().await;
        if products.remove(id).is_none() {
            return Err(RepositoryError::product_not_found(id));
        }
        Ok(())
    }

    async fn list(&self, params: PageParams) -> Result<(Vec<Product>, u64)> {
        let products = self.products.read().await;
        let total = products.len() as u64;

        let mut rows: Vec<Product> = products.values().cloned().collect();
        // Creation order, with the id as a tie-breaker for determinism.
        rows.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        let page: Vec<Product> = rows
            .into_iter()
            .skip(params.offset())
            .take(params.limit() as usize)
            .collect();

        Ok((page, total))
    }
}
