use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache entry TTL in seconds (default: 43,200 = 12 hours)
    pub cache_ttl_seconds: u64,
    /// Interval between cache eviction sweeps in seconds (default: 3,600 = 1 hour)
    pub cache_sweep_interval_seconds: u64,
    /// Maximum number of cache entries (default: 100,000)
    pub cache_max_entries: usize,
    /// Interval between periodic cache refreshes in seconds
    /// (default: 43,200 = 12 hours, matching the entry TTL)
    pub refresh_interval_seconds: u64,
    /// Delay before the initial cache load in seconds, allowing the store
    /// connection to warm up (default: 2)
    pub refresh_warmup_seconds: u64,
    /// Maximum number of products fetched by a bulk load (default: 10,000)
    pub bulk_load_limit: usize,
    /// Upper bound on any single store call in seconds (default: 5)
    pub store_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache entry TTL (default: 43200)
    /// - `CACHE_SWEEP_INTERVAL_SECONDS` - Eviction sweep interval (default: 3600)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 100000)
    /// - `REFRESH_INTERVAL_SECONDS` - Periodic refresh interval (default: 43200)
    /// - `REFRESH_WARMUP_SECONDS` - Delay before the initial load (default: 2)
    /// - `BULK_LOAD_LIMIT` - Bulk load product bound (default: 10000)
    /// - `STORE_TIMEOUT_SECONDS` - Store call timeout (default: 5)
    pub fn from_env() -> Self {
        Self {
            cache_ttl_seconds: env_or("CACHE_TTL_SECONDS", 43_200),
            cache_sweep_interval_seconds: env_or("CACHE_SWEEP_INTERVAL_SECONDS", 3_600),
            cache_max_entries: env_or("CACHE_MAX_ENTRIES", 100_000),
            refresh_interval_seconds: env_or("REFRESH_INTERVAL_SECONDS", 43_200),
            refresh_warmup_seconds: env_or("REFRESH_WARMUP_SECONDS", 2),
            bulk_load_limit: env_or("BULK_LOAD_LIMIT", 10_000),
            store_timeout_seconds: env_or("STORE_TIMEOUT_SECONDS", 5),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Get the eviction sweep interval as a Duration.
    pub fn cache_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.cache_sweep_interval_seconds)
    }

    /// Get the refresh interval as a Duration.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_seconds)
    }

    /// Get the refresh warm-up delay as a Duration.
    pub fn refresh_warmup(&self) -> Duration {
        Duration::from_secs(self.refresh_warmup_seconds)
    }

    /// Get the store call timeout as a Duration.
    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
