//! # Rental Ledger
//!
//! Append-only store of [`Rental`](crate::model::Rental) records.
//!
//! The ledger is never written by request handlers directly: the only producer is the movie
//! actor's check-out, which appends through [`RentalClient`](crate::clients::RentalClient)
//! while it holds exclusive access to the movie. `date_out` is stamped here, when the record
//! is created.
//!
//! Creating a rental inserts it and answers in one step, so if the caller loses the answer
//! the rental was never stored. That is what lets a failed append be retried safely.

pub mod entity;
pub mod error;

pub use entity::RentalAction;
pub use error::*;

use crate::model::Rental;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates the ledger split across `shards` actors (one is enough for most shops).
pub fn new(
    buffer_size: usize,
    shards: usize,
) -> (Vec<ResourceActor<Rental>>, ResourceClient<Rental>) {
    ResourceActor::sharded(buffer_size, shards)
}
