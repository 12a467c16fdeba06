//! Cache backend implementations.
//!
//! Concrete implementations of the `stocksync_core::cache::ProductCache`
//! trait. Only the in-memory backend exists today; a networked backend
//! (e.g. Redis) would slot in behind the same trait.

pub mod memory;

pub use memory::MemoryCache;
