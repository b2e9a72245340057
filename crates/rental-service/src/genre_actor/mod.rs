//! # Genre Actor
//!
//! Plain CRUD store for [`Genre`](crate::model::Genre). Movies embed a genre snapshot taken
//! through [`GenreClient`](crate::clients::GenreClient) when they are created or updated.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation
//! - [`error`] - [`GenreError`]

pub mod entity;
pub mod error;

pub use entity::GenreAction;
pub use error::*;

use crate::model::Genre;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Genre actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Genre>, ResourceClient<Genre>) {
    ResourceActor::new(buffer_size)
}
