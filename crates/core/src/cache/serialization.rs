//! Pure functions for serializing/deserializing products to/from cache bytes.
//!
//! Cache values are JSON so they stay human-readable when debugging a
//! running instance.

use crate::product::Product;
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a product to JSON bytes.
pub fn serialize_product(product: &Product) -> Result<Vec<u8>> {
    serde_json::to_vec(product).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a product.
pub fn deserialize_product(bytes: &[u8]) -> Result<Product> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes a slice of products (a listing page) to JSON bytes.
pub fn serialize_products(products: &[Product]) -> Result<Vec<u8>> {
    serde_json::to_vec(products).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a vector of products.
pub fn deserialize_products(bytes: &[u8]) -> Result<Vec<Product>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::CreateProduct;
    use chrono::{TimeZone, Utc};

    fn test_product(id: &str) -> Product {
        let timestamp = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        let request = CreateProduct::new("Keyboard", 49.99, 10)
            .with_description("Mechanical keyboard")
            .with_category("peripherals");

        Product {
            id: id.to_string(),
            name: request.name,
            description: request.description,
            price: request.price,
            quantity: request.quantity,
            category: request.category,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    #[test]
    fn test_roundtrip_product() {
        let product = test_product("p-1");

        let bytes = serialize_product(&product).expect("serialize should succeed");
        let deserialized = deserialize_product(&bytes).expect("deserialize should succeed");

        assert_eq!(product, deserialized);
    }

    #[test]
    fn test_roundtrip_products_vec() {
        let products = vec![test_product("p-1"), test_product("p-2")];

        let bytes = serialize_products(&products).expect("serialize should succeed");
        let deserialized = deserialize_products(&bytes).expect("deserialize should succeed");

        assert_eq!(products, deserialized);
    }

    #[test]
    fn test_deserialize_product_malformed_bytes() {
        let result = deserialize_product(b"not valid json");

        assert!(matches!(
            result,
            Err(SerializationError::DeserializeFailed(_))
        ));
    }

    #[test]
    fn test_deserialize_products_malformed_bytes() {
        let result = deserialize_products(b"{\"invalid\": true}");

        assert!(matches!(
            result,
            Err(SerializationError::DeserializeFailed(_))
        ));
    }

    #[test]
    fn test_serialize_empty_page() {
        let products: Vec<Product> = vec![];

        let bytes = serialize_products(&products).expect("serialize should succeed");
        assert_eq!(bytes, b"[]");

        let deserialized = deserialize_products(&bytes).expect("deserialize should succeed");
        assert!(deserialized.is_empty());
    }
}
