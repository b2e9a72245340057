//! Configuration management for the rental service.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::engine::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Name used in the startup log line (`RENTALS_APP_NAME`, default `vidly`)
    pub app_name: String,
    /// Actor configuration
    pub actors: ActorConfig,
    /// Rental retry configuration
    pub retry: RetryConfig,
    /// Default log filter when `RUST_LOG` is unset (default `info`)
    pub log_level: String,
}

/// Actor mailbox and shard sizing. Every value is at least 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorConfig {
    /// Pending requests each actor queues before senders wait (`RENTALS_MAILBOX_CAPACITY`, default 32)
    pub mailbox_capacity: usize,
    /// Movie shards (`RENTALS_MOVIE_SHARDS`, default 4). Spreads mailbox traffic only;
    /// check-outs are serialized per movie with any shard count.
    pub movie_shards: usize,
    /// Rental ledger shards (`RENTALS_LEDGER_SHARDS`, default 1)
    pub ledger_shards: usize,
}

/// Retry configuration for rentals that failed with a retryable error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// `RENTALS_RETRY_MAX`, default 3
    pub max_retries: usize,
    /// `RENTALS_RETRY_INITIAL_DELAY_MS`, default 10
    pub initial_delay_ms: u64,
    /// `RENTALS_RETRY_MAX_DELAY_MS`, default 1000
    pub max_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from `lookup`, which maps a variable name to its value.
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parsed = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());
        let count = |key: &str, default: usize| {
            parsed(key)
                .and_then(|n| usize::try_from(n).ok())
                .unwrap_or(default)
        };

        Self {
            app_name: lookup("RENTALS_APP_NAME").unwrap_or_else(|| "vidly".to_string()),
            actors: ActorConfig {
                mailbox_capacity: count("RENTALS_MAILBOX_CAPACITY", 32).max(1),
                movie_shards: count("RENTALS_MOVIE_SHARDS", 4).max(1),
                ledger_shards: count("RENTALS_LEDGER_SHARDS", 1).max(1),
            },
            retry: RetryConfig {
                max_retries: count("RENTALS_RETRY_MAX", 3),
                initial_delay_ms: parsed("RENTALS_RETRY_INITIAL_DELAY_MS").unwrap_or(10),
                max_delay_ms: parsed("RENTALS_RETRY_MAX_DELAY_MS").unwrap_or(1000),
            },
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::builder()
            .max_retries(self.retry.max_retries)
            .initial_delay(Duration::from_millis(self.retry.initial_delay_ms))
            .max_delay(Duration::from_millis(self.retry.max_delay_ms))
            .build()
    }
}
