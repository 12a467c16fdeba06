//! Core domain types and abstractions for the stocksync catalog service.
//!
//! This crate holds everything the service binary shares with alternative
//! backends: the product domain model, the storage repository trait with its
//! error taxonomy, and the cache trait with key helpers and serialization.
//! It performs no I/O of its own.

pub mod cache;
pub mod product;
pub mod storage;
