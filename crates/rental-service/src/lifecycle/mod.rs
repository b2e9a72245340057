//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the actors of the rental service.
//!
//! ## Wiring
//!
//! Actors are created first, without dependencies, and each is then started with the
//! clients it needs as its `run` context:
//!
//! | Actor | Shards | Context |
//! |-------|--------|---------|
//! | Genre | 1 | `()` |
//! | Customer | 1 | `()` |
//! | Rental ledger | `ledger_shards` | `()` |
//! | Movie | `movie_shards` | `RentalClient` |
//!
//! The graph is acyclic (movies call the ledger, nothing calls movies back), so dropping the
//! clients is enough to stop everything: each actor exits when its last sender is gone.
//!
//! ## Configuration
//!
//! [`Config::from_env`] reads the `RENTALS_*` variables; see [`config`].
//!
//! ## Observability
//!
//! Logging is set up once per process with
//! [`setup_tracing_with_default`](actor_framework::tracing::setup_tracing_with_default),
//! passing [`Config::log_level`] as the filter used when `RUST_LOG` is unset.

pub mod config;
pub mod rental_system;

pub use config::*;
pub use rental_system::*;
