//! # Generic Client
//!
//! The generic client for communicating with actors.

use crate::entity::{ActorEntity, EntityId};
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// ## ResourceClient
///
/// The `ResourceClient<T>` provides a type‑safe, async API for interacting with a
/// `ResourceActor<T>` (or a set of sharded actors for the same resource). It forwards
/// requests over Tokio mpsc channels and returns results via oneshot channels.
///
/// * **Cloneable** – holds only senders, so cloning is inexpensive.
/// * **Routing** – requests naming an id go to the shard that minted it; creates are
///   spread round-robin; `list` fans out to every shard.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    shards: Arc<[mpsc::Sender<ResourceRequest<T>>]>,
    next_shard: Arc<AtomicUsize>,
}

impl<T: ActorEntity> ResourceClient<T> {
    /// Client for a single, unsharded actor.
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self::from_shards(vec![sender])
    }

    /// `senders[s]` must be the actor minting sequences `s+1, s+1+n, ...`.
    pub(crate) fn from_shards(senders: Vec<mpsc::Sender<ResourceRequest<T>>>) -> Self {
        debug_assert!(!senders.is_empty());
        Self {
            shards: senders.into(),
            next_shard: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of actors behind this client.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    fn shard_for(&self, id: &T::Id) -> &mpsc::Sender<ResourceRequest<T>> {
        &self.shards[id.shard(self.shards.len())]
    }

    fn next_create_shard(&self) -> &mpsc::Sender<ResourceRequest<T>> {
        let index = self.next_shard.fetch_add(1, Ordering::Relaxed) % self.shards.len();
        &self.shards[index]
    }

    async fn request<R>(
        sender: &mpsc::Sender<ResourceRequest<T>>,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        Self::request(self.next_create_shard(), |respond_to| {
            ResourceRequest::Create { params, respond_to }
        })
        .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        Self::request(self.shard_for(&id), |respond_to| ResourceRequest::Get {
            id,
            respond_to,
        })
        .await
    }

    /// Every entity across all shards, in shard order.
    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let mut all = Vec::new();
        for shard in self.shards.iter() {
            let mut items =
                Self::request(shard, |respond_to| ResourceRequest::List { respond_to }).await?;
            all.append(&mut items);
        }
        Ok(all)
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        Self::request(self.shard_for(&id), |respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    /// Removes the entity and returns its final state.
    pub async fn delete(&self, id: T::Id) -> Result<T, FrameworkError> {
        Self::request(self.shard_for(&id), |respond_to| ResourceRequest::Delete {
            id,
            respond_to,
        })
        .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        Self::request(self.shard_for(&id), |respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}
