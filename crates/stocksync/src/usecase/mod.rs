//! Use case layer: the cache-coherent product access coordinator.
//!
//! Every product read and write goes through [`ProductUseCase`], which ties
//! the cache and the store together under a read-through / write-through
//! policy. Handlers never talk to either directly.

mod error;
mod products;

pub use error::UseCaseError;
pub use products::ProductUseCase;
