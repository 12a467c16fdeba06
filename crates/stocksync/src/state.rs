//! Shared application state.
//!
//! The state is cloned into every request handler and carries the product
//! use case (the single entry point for all product reads and writes) plus
//! the shutdown signal for the background tasks.

use std::sync::Arc;

use tokio::sync::watch;

use crate::usecase::ProductUseCase;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Product access layer; mediates every read/write between handlers,
    /// the cache and the store.
    pub products: Arc<ProductUseCase>,
    /// Shutdown signal sender for the refresher and cache sweeper.
    shutdown_tx: Arc<watch::Sender<bool>>,
}

impl AppState {
    /// Creates a new state around the given use case.
    pub fn new(products: Arc<ProductUseCase>) -> Self {
        let (shutdown_tx, _) = watch::channel(false);
        Self {
            products,
            shutdown_tx: Arc::new(shutdown_tx),
        }
    }

    /// Returns a receiver that resolves once shutdown has been signalled.
    pub fn shutdown_rx(&self) -> watch::Receiver<bool> {
        self.shutdown_tx.subscribe()
    }

    /// Signal the background tasks to stop.
    pub fn signal_shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }
}
