mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{is_list_key, list_key, product_key, LIST_KEY_PREFIX};
pub use serialization::{
    deserialize_product, deserialize_products, serialize_product, serialize_products,
    SerializationError,
};
pub use traits::ProductCache;
