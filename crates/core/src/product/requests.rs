//! API request types for product operations.
//!
//! These types are shared between the handlers and the use case layer.
//! Following the Functional Core pattern, these are pure data types with no I/O.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Request payload for creating a new product.
///
/// The store assigns the id and timestamps; callers only provide the
/// domain fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub category: String,
}

impl CreateProduct {
    /// Create a new request with the required fields.
    pub fn new(name: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            quantity,
            category: String::new(),
        }
    }

    /// Set the product description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the product category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Validates the request, rejecting it before any store or cache call.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.name, self.price, self.quantity)
    }
}

/// Request payload for replacing an existing product.
///
/// Carries the same mutable fields as [`CreateProduct`]; the id and
/// creation timestamp of the stored record are preserved by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProduct {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub category: String,
}

impl UpdateProduct {
    /// Create a new request with the required fields.
    pub fn new(name: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            quantity,
            category: String::new(),
        }
    }

    /// Set the product description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the product category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Validates the request, rejecting it before any store or cache call.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.name, self.price, self.quantity)
    }
}

fn validate_fields(name: &str, price: f64, quantity: i64) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !price.is_finite() {
        return Err(ValidationError::NonFinitePrice);
    }
    if price < 0.0 {
        return Err(ValidationError::NegativePrice);
    }
    if quantity < 0 {
        return Err(ValidationError::NegativeQuantity);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_create_request() {
        let request = CreateProduct::new("Keyboard", 49.99, 10)
            .with_description("Mechanical keyboard")
            .with_category("peripherals");

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let request = CreateProduct::new("   ", 49.99, 10);
        assert_eq!(request.validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_negative_price_rejected() {
        let request = CreateProduct::new("Keyboard", -1.0, 10);
        assert_eq!(request.validate(), Err(ValidationError::NegativePrice));
    }

    #[test]
    fn test_non_finite_price_rejected() {
        let request = CreateProduct::new("Keyboard", f64::NAN, 10);
        assert_eq!(request.validate(), Err(ValidationError::NonFinitePrice));

        let request = CreateProduct::new("Keyboard", f64::INFINITY, 10);
        assert_eq!(request.validate(), Err(ValidationError::NonFinitePrice));
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let request = CreateProduct::new("Keyboard", 49.99, -5);
        assert_eq!(request.validate(), Err(ValidationError::NegativeQuantity));
    }

    #[test]
    fn test_zero_price_and_quantity_allowed() {
        let request = UpdateProduct::new("Freebie", 0.0, 0);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_request_validation_mirrors_create() {
        let request = UpdateProduct::new("", 10.0, 1);
        assert_eq!(request.validate(), Err(ValidationError::EmptyName));
    }
}
