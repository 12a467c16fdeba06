use thiserror::Error;

/// Errors produced when validating product input.
///
/// Validation runs before any store or cache call, so a rejected request
/// never mutates either.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Product name must not be empty")]
    EmptyName,
    #[error("Product price must not be negative")]
    NegativePrice,
    #[error("Product price must be a finite number")]
    NonFinitePrice,
    #[error("Product quantity must not be negative")]
    NegativeQuantity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_display() {
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "Product name must not be empty"
        );
    }

    #[test]
    fn test_negative_price_display() {
        assert_eq!(
            ValidationError::NegativePrice.to_string(),
            "Product price must not be negative"
        );
    }

    #[test]
    fn test_negative_quantity_display() {
        assert_eq!(
            ValidationError::NegativeQuantity.to_string(),
            "Product quantity must not be negative"
        );
    }
}
