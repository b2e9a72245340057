//! # Movie Actor
//!
//! The movie catalogue and its stock counters. Each movie's writes are serialized on their
//! own, so a check-out waiting on the ledger holds up only that movie. Shards spread the
//! mailbox load.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Movie`]
//! - [`error`] - [`MovieError`]
//! - [`actions`] - [`MovieAction`] and [`MovieActionResult`]
//! - [`new()`] - Factory function that creates the shards and their client
//!
//! ## Custom Actions
//!
//! ```rust,ignore
//! // Read the stock level
//! let stock = movie_client.check_stock(movie_id).await?;
//!
//! // Append a rental and take one copy out of stock, as a single step
//! let rental = movie_client.check_out(movie_id, draft).await?;
//! ```
//!
//! ## Context
//!
//! Each shard runs with a [`RentalClient`](crate::clients::RentalClient) for the ledger. The
//! ledger never calls back into movies, so shutdown order is simply movies first, then the
//! ledger once the last shard has dropped its client.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Movie;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates `shards` Movie actors and the client routing between them.
pub fn new(
    buffer_size: usize,
    shards: usize,
) -> (Vec<ResourceActor<Movie>>, ResourceClient<Movie>) {
    ResourceActor::sharded(buffer_size, shards)
}
