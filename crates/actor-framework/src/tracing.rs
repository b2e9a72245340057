//! # Observability & Tracing
//!
//! Structured logging for the whole actor system.
//!
//! Every `ResourceActor` logs its lifecycle and each operation with an `entity_type` field
//! (`Movie`, `Rental`, …) and the entity `id`, so module paths are left out of the output
//! (`with_target(false)`).
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per create / action / shutdown
//! RUST_LOG=debug cargo run     # adds request payloads and lookups
//! ```
//!
//! A typical rental at `info` reads:
//!
//! ```text
//! INFO Created entity_type="Customer" id=customer_1 size=1
//! INFO create_rental: Created entity_type="Rental" id=rental_1 size=1
//! INFO create_rental: Action ok entity_type="Movie" id=movie_1
//! INFO create_rental: Rental committed rental_id=rental_1 stock=4
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the compact fmt subscriber, filtered by `RUST_LOG` (default `info`).
pub fn setup_tracing() {
    setup_tracing_with_default("info");
}

/// Installs the compact fmt subscriber; `default_filter` applies when `RUST_LOG` is unset
/// or unparsable.
///
/// Safe to call more than once: later calls are no-ops, which lets every test start with it.
pub fn setup_tracing_with_default(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type replaces module paths
        .compact()
        .try_init();
}
