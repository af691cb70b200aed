//! HTTP server initialization and runtime setup.
//!
//! Handles backend client and cache setup, the optional sweeper, and the Axum
//! server lifecycle.

use crate::application::services::CompanyService;
use crate::config::Config;
use crate::infrastructure::backend::HttpFetcher;
use crate::infrastructure::cache::{CacheService, ExpiryPolicy, MemoryCache, NullCache};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use chrono::TimeDelta;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Backend routing table
/// - `reqwest` client for the backends
/// - In-memory cache (or NullCache when disabled)
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let registry = config.registry();
    if registry.is_empty() {
        tracing::warn!("No backends configured, every lookup will fail with 404");
    }

    let mut fetcher =
        HttpFetcher::new(config.backend_timeout()).context("Failed to build HTTP client")?;
    if config.conditional_requests {
        fetcher = fetcher.with_conditional_requests(config.conditional_max_entries);
        tracing::info!("Conditional backend requests enabled");
    }

    let cache: Arc<dyn CacheService> = if config.cache_enabled {
        let default_ttl = seconds(config.cache_default_ttl_seconds)
            .context("CACHE_DEFAULT_TTL_SECONDS is out of range")?;
        let memory = Arc::new(MemoryCache::new(ExpiryPolicy::activity(default_ttl)));

        if let Some(seconds) = config.cache_sweep_interval_seconds {
            memory.spawn_sweeper(Duration::from_secs(seconds));
            tracing::info!("Cache sweeper started (every {seconds}s)");
        }

        tracing::info!("Cache enabled (in-memory)");
        memory
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let mut service = CompanyService::new(registry, Arc::new(fetcher), cache);
    if config.stale_on_error {
        let retention = seconds(config.stale_retention_seconds)
            .context("STALE_RETENTION_SECONDS is out of range")?;
        let last_known = Arc::new(MemoryCache::new(ExpiryPolicy::fixed(retention)));
        last_known.spawn_sweeper(config.stale_sweep_interval());

        service = service.with_stale_on_error(last_known);
        tracing::info!("Serving last known records on backend failure");
    }

    let state = AppState::new(Arc::new(service));
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn seconds(value: u64) -> Result<TimeDelta, std::num::TryFromIntError> {
    i64::try_from(value).map(TimeDelta::seconds)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
