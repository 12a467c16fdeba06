//! Storage backend implementations.
//!
//! Concrete implementations of the `stocksync_core::storage::ProductRepository`
//! trait. The in-memory backend backs the default build and the test suite;
//! a document-store backend would slot in behind the same trait.

pub mod inmemory;

pub use inmemory::InMemoryRepository;
