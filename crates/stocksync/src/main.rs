mod app;
mod cache;
mod config;
mod handlers;
mod refresher;
mod state;
mod storage;
mod usecase;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    app::create_app, cache::MemoryCache, config::Config, refresher::run_refresher,
    state::AppState, storage::InMemoryRepository, usecase::ProductUseCase,
};

/// StockSync - product catalog service with a cache-coherent access layer
#[derive(Parser, Debug)]
#[command(name = "stocksync")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stocksync=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    // Wire up the storage backend, cache and use case layer
    let repository = Arc::new(InMemoryRepository::new());
    let cache = MemoryCache::new(config.cache_max_entries, config.cache_ttl());
    let products = Arc::new(ProductUseCase::new(
        repository,
        Arc::new(cache.clone()),
        config.store_timeout(),
        config.bulk_load_limit,
    ));

    let state = AppState::new(products.clone());

    // Background eviction sweep inside the cache
    let sweeper = tokio::spawn(cache.run_sweeper(config.cache_sweep_interval(), state.shutdown_rx()));

    // Periodic cache refresher: one bulk load after warm-up, then on a fixed interval
    let refresher = tokio::spawn(run_refresher(
        products,
        config.refresh_warmup(),
        config.refresh_interval(),
        state.shutdown_rx(),
    ));

    // Build the application router
    let app = create_app(state.clone());

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await?;

    // The shutdown signal already stopped the background loops; wait for them
    // to finish their in-flight work.
    let _ = refresher.await;
    let _ = sweeper.await;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM) and stop the background tasks.
async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }

    // Signal the refresher and cache sweeper to stop
    state.signal_shutdown();
}
