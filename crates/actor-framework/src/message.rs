//! # Generic Messages
//!
//! The generic message types used for communication between the `ResourceClient` and
//! `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map to CRUD plus `List` and a resource-specific `Action`:
///
/// - **Create**: builds the entity from [`ActorEntity::Create`], runs `on_create`, stores it,
///   and answers with the stored entity.
/// - **Get**: fetches one entity by ID.
/// - **List**: every entity held by the receiving actor (one shard).
/// - **Update**: applies [`ActorEntity::Update`] through `on_update`.
/// - **Delete**: runs `on_delete`, then removes the entity.
/// - **Action**: executes a custom [`ActorEntity::Action`].
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
