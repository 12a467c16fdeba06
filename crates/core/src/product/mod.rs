mod error;
mod requests;
mod types;

pub use error::ValidationError;
pub use requests::{CreateProduct, UpdateProduct};
pub use types::Product;
