//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (Genre, Customer, Movie,
//! Rental, …) must implement to be managed by the generic `ResourceActor`. It specifies
//! associated types for IDs, DTOs, actions, context, and errors, and provides lifecycle hooks
//! (`on_create`, `on_update`, `on_delete`, `handle_action`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! You do **not** need to implement these methods unless you want to customize behavior.
//! The default implementation does nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Identifier backed by a `u32` sequence number.
///
/// The actor assigns sequence numbers on create. When a resource is split across shards,
/// the sequence also decides which shard owns the entity: shard `s` of `n` only ever
/// hands out sequences where `(seq - 1) % n == s`.
pub trait EntityId:
    Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32> + 'static
{
    /// The sequence number this id was minted from.
    fn sequence(&self) -> u32;

    /// Index of the shard owning this id, given `shards` total.
    fn shard(&self, shards: usize) -> usize {
        let seq = self.sequence().saturating_sub(1) as usize;
        seq % shards.max(1)
    }
}

impl EntityId for u32 {
    fn sequence(&self) -> u32 {
        *self
    }
}

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., calling other actors).
/// It also defines a `Context` type, which is injected into every hook. This allows "Late Binding"
/// of dependencies (passing clients to `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: EntityId;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug + 'static;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug + 'static;

    /// Enum representing resource-specific operations (e.g., `CheckOut`).
    type Action: Send + Sync + Debug + 'static;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug + 'static;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed. Shared by every in-flight hook of the actor.
    type Context: Send + Sync + 'static;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message: `MovieError` is the union of
    /// everything a movie operation can fail with.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    /// An error here means the entity is never inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received, on a staged copy that replaces the stored
    /// entity only on success.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    ///
    /// Runs on a staged copy. No other update, delete or action for the same entity starts
    /// until this one has finished, so a check followed by a write inside one action is never
    /// interleaved with another write to this entity. Other entities are not held up. The
    /// copy is stored only if the action returns `Ok`.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::EntityId;

    #[test]
    fn shard_routing_follows_sequence_stride() {
        assert_eq!(1u32.shard(4), 0);
        assert_eq!(4u32.shard(4), 3);
        assert_eq!(5u32.shard(4), 0);
        assert_eq!(7u32.shard(1), 0);
    }

    #[test]
    fn zero_shards_is_treated_as_one() {
        assert_eq!(9u32.shard(0), 0);
    }
}
