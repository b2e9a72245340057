//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient), one per
//! resource. `get`, `list` and `delete` come from [`ActorClient`](actor_framework::ActorClient);
//! each client adds its create/update calls, sorted listings and actions.

pub mod customer_client;
pub mod genre_client;
pub mod movie_client;
pub mod rental_client;

pub use customer_client::*;
pub use genre_client::*;
pub use movie_client::*;
pub use rental_client::*;
