//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent resource stores. Each resource type (a genre, a
//! customer, a movie, a rental) is owned by a [`ResourceActor`] that serializes writes per
//! entity, and is reached through a cloneable [`ResourceClient`].
//!
//! ## Why actors?
//!
//! - Isolated state: an actor's store is a plain `HashMap`, no locks.
//! - Per-entity serialization: a check followed by a write inside one action can never be
//!   interleaved with another write to the same entity, while other entities carry on.
//! - Coordination by message: when one resource needs another (a movie check-out appending
//!   to the rental ledger), it calls that resource's client from inside its own action.
//!
//! Further reading: [Actors with Tokio](https://ryhl.io/blog/actors-with-tokio/).
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the domain model, its create/update payloads, its actions
//!    and the hooks that validate them.
//! 2. **Runtime** ([`ResourceActor`]): message loop, id minting, sharding.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed async calls.
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Shelf {
//!     id: u32,
//!     copies: u8,
//! }
//!
//! #[derive(Debug)] struct ShelfCreate { copies: u8 }
//! #[derive(Debug)] struct ShelfUpdate { copies: u8 }
//! #[derive(Debug)] enum ShelfAction { Take }
//! #[derive(Debug, thiserror::Error)] #[error("shelf is empty")] struct ShelfEmpty;
//!
//! #[async_trait]
//! impl ActorEntity for Shelf {
//!     type Id = u32;
//!     type Create = ShelfCreate;
//!     type Update = ShelfUpdate;
//!     type Action = ShelfAction;
//!     type ActionResult = u8;
//!     type Context = ();
//!     type Error = ShelfEmpty;
//!
//!     fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, copies: params.copies })
//!     }
//!
//!     async fn on_update(&mut self, update: ShelfUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         self.copies = update.copies;
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: ShelfAction, _ctx: &()) -> Result<u8, Self::Error> {
//!         match action {
//!             ShelfAction::Take => {
//!                 self.copies = self.copies.checked_sub(1).ok_or(ShelfEmpty)?;
//!                 Ok(self.copies)
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Shelf>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let shelf = client.create(ShelfCreate { copies: 1 }).await.unwrap();
//!     assert_eq!(client.perform_action(shelf.id, ShelfAction::Take).await.unwrap(), 0);
//!
//!     let err = client.perform_action(shelf.id, ShelfAction::Take).await.unwrap_err();
//!     assert!(err.downcast_entity::<ShelfEmpty>().is_ok());
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are handed to [`ResourceActor::run`], not to the constructor. All actors and
//! clients are created first, then each actor is started with the clients it needs:
//!
//! ```text
//! let (ledger, rentals) = ResourceActor::<Rental>::new(32);
//! let (shelves, movies) = ResourceActor::<Movie>::sharded(32, 4);
//! tokio::spawn(ledger.run(()));
//! for shelf in shelves {
//!     tokio::spawn(shelf.run(RentalClient::new(rentals.clone())));
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from queued expectations, which makes it easy to put
//! a failing dependency into an actor's context. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{ActorEntity, EntityId};
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
