//! Product CRUD handlers.
//!
//! These handlers are transport-only: they parse the request, call the
//! product use case and map errors to status codes. Caching and store
//! access live behind the use case.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use stocksync_core::product::{CreateProduct, Product, UpdateProduct};
use stocksync_core::storage::PageParams;

use crate::{handlers::AppError, state::AppState};

/// Query parameters for listing products.
#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    /// 1-based page number (default: 1)
    #[serde(default = "default_page")]
    pub page: u32,
    /// Page size (default: 20)
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    20
}

/// Response body for listing products.
#[derive(Debug, Serialize)]
pub struct ListProductsResponse {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// List products (GET /api/products).
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<ListProductsResponse>, AppError> {
    let params = PageParams::new(query.page, query.limit)?;
    let (products, total) = state.products.list(params).await?;

    Ok(Json(ListProductsResponse {
        products,
        total,
        page: query.page,
        limit: query.limit,
    }))
}

/// Create a new product (POST /api/products).
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProduct>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    tracing::debug!(name = %payload.name, "Received create product request");

    let product = state.products.create(payload).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a single product by ID (GET /api/products/{id}).
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = state.products.get_by_id(&id).await?;

    Ok(Json(product))
}

/// Update a product by ID (PUT /api/products/{id}).
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProduct>,
) -> Result<Json<Product>, AppError> {
    tracing::debug!(product_id = %id, "Received update product request");

    let product = state.products.update(&id, payload).await?;

    Ok(Json(product))
}

/// Delete a product by ID (DELETE /api/products/{id}).
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    tracing::debug!(product_id = %id, "Received delete product request");

    state.products.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
