//! Periodic cache refresh from the store.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::usecase::ProductUseCase;

/// Warms the cache once after startup and then reloads it on a fixed
/// interval until shutdown is signalled.
///
/// A failed refresh is logged and retried at the next tick; the cache keeps
/// serving its previous contents in the meantime. Two independent cycles
/// never overlap because each reload runs to completion before the next
/// tick is awaited.
pub async fn run_refresher(
    products: Arc<ProductUseCase>,
    warmup_delay: Duration,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    // Give the store a moment to come up before the initial load
    tokio::select! {
        _ = tokio::time::sleep(warmup_delay) => {}
        _ = shutdown.changed() => {
            tracing::debug!("Refresher stopped before warmup");
            return;
        }
    }

    refresh(&products).await;

    loop {
        tokio::select! {
            _ = tokio::time::sleep(interval) => refresh(&products).await,
            _ = shutdown.changed() => {
                tracing::debug!("Refresher stopped");
                return;
            }
        }
    }
}

async fn refresh(products: &ProductUseCase) {
    match products.bulk_load().await {
        Ok(count) => tracing::info!(products = count, "Cache refresh complete"),
        Err(err) => tracing::warn!(error = %err, "Cache refresh failed, will retry next cycle"),
    }
}
