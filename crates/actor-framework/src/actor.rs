//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the state of one
//! resource type (or one shard of it). The actor alone touches the entity store, so no
//! locks guard it. Writes are serialized per entity: a slow hook on one entity holds up
//! later writes to that entity and nothing else.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// The actor loop owns the `store`, so it needs no `Mutex`. Reads (`Get`, `List`) are
/// answered straight from the store. Writes (`Update`, `Delete`, `Action`) run their hook on
/// a staged copy in a spawned task, one at a time per entity id; writes to other ids are
/// not queued behind it. The staged copy is stored when the hook succeeds, before the
/// caller is answered. A resource type with heavy traffic can also be split with
/// [`ResourceActor::sharded`].
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Shelf { id: u32, copies: u8 }
/// #[derive(Debug)] struct ShelfCreate { copies: u8 }
/// #[derive(Debug)] struct ShelfUpdate;
/// #[derive(Debug)] enum ShelfAction {}
/// #[derive(Debug, thiserror::Error)] #[error("shelf error")] struct ShelfError;
///
/// #[async_trait]
/// impl ActorEntity for Shelf {
///     type Id = u32;
///     type Create = ShelfCreate;
///     type Update = ShelfUpdate;
///     type Action = ShelfAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = ShelfError;
///
///     fn from_create_params(id: u32, p: ShelfCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, copies: p.copies })
///     }
///     async fn on_update(&mut self, _: ShelfUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: ShelfAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Shelf>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let shelf = client.create(ShelfCreate { copies: 3 }).await.unwrap();
///     assert_eq!(shelf.id, 1);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: mints the next sequence, calls `from_create_params`, then `on_create`, then
///   inserts and answers with the stored entity. Insert and answer happen with no `.await`
///   between them. Once the shard's sequences would overflow `u32`, creates fail with
///   [`FrameworkError::IdSpaceExhausted`].
/// * **Get** / **List**: clones out of the store.
/// * **Update**: `on_update` on a staged copy, answers with its new state.
/// * **Delete**: `on_delete`, then removes and answers with the removed entity.
/// * **Action**: `handle_action` on a staged copy.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    /// Ids with a write in flight, each with the writes waiting behind it.
    lanes: HashMap<T::Id, VecDeque<Write<T>>>,
    done: mpsc::UnboundedSender<Finished<T>>,
    finished: mpsc::UnboundedReceiver<Finished<T>>,
    /// `None` once this shard has used up its sequences.
    next_id: Option<u32>,
    id_stride: u32,
    entity_type: &'static str,
}

/// A request that changes one stored entity.
enum Write<T: ActorEntity> {
    Update {
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        respond_to: Response<T>,
    },
    Action {
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

enum Outcome<T: ActorEntity> {
    Updated(Result<T, FrameworkError>, Response<T>),
    Deleted(Result<(), FrameworkError>, Response<T>),
    Acted(
        Result<(T, T::ActionResult), FrameworkError>,
        Response<T::ActionResult>,
    ),
}

struct Finished<T: ActorEntity> {
    id: T::Id,
    /// `None` when the hook's task ended without an outcome (it panicked).
    outcome: Option<Outcome<T>>,
}

/// Reports the end of a write to the actor loop. Dropping it unfinished still frees the id.
struct Lane<T: ActorEntity> {
    id: Option<T::Id>,
    done: mpsc::UnboundedSender<Finished<T>>,
}

impl<T: ActorEntity> Lane<T> {
    fn finish(mut self, outcome: Outcome<T>) {
        if let Some(id) = self.id.take() {
            let _ = self.done.send(Finished {
                id,
                outcome: Some(outcome),
            });
        }
    }
}

impl<T: ActorEntity> Drop for Lane<T> {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            let _ = self.done.send(Finished { id, outcome: None });
        }
    }
}

fn entity_error<E>(e: E) -> FrameworkError
where
    E: std::error::Error + Send + Sync + 'static,
{
    FrameworkError::EntityError(Box::new(e))
}

impl<T: ActorEntity> Write<T> {
    fn reject(self, error: FrameworkError) {
        match self {
            Write::Update { respond_to, .. } => {
                let _ = respond_to.send(Err(error));
            }
            Write::Delete { respond_to } => {
                let _ = respond_to.send(Err(error));
            }
            Write::Action { respond_to, .. } => {
                let _ = respond_to.send(Err(error));
            }
        }
    }

    async fn run(self, mut staged: T, context: Arc<T::Context>, lane: Lane<T>) {
        let outcome = match self {
            Write::Update { update, respond_to } => {
                let result = staged.on_update(update, &*context).await;
                Outcome::Updated(result.map(|()| staged).map_err(entity_error), respond_to)
            }
            Write::Delete { respond_to } => {
                let result = staged.on_delete(&*context).await;
                Outcome::Deleted(result.map_err(entity_error), respond_to)
            }
            Write::Action { action, respond_to } => {
                let result = staged.handle_action(action, &*context).await;
                Outcome::Acted(
                    result.map(|value| (staged, value)).map_err(entity_error),
                    respond_to,
                )
            }
        };
        lane.finish(outcome);
    }
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (actor, sender) = Self::shard(buffer_size, 1, 1);
        (actor, ResourceClient::new(sender))
    }

    /// Splits one resource type across `shards` actors behind a single client.
    ///
    /// Every returned actor must be `run`; the client routes by id, so a shard that is never
    /// started makes its entities unreachable.
    pub fn sharded(buffer_size: usize, shards: usize) -> (Vec<Self>, ResourceClient<T>) {
        let shards = shards.max(1);
        let stride = u32::try_from(shards).unwrap_or(u32::MAX);
        let (actors, senders): (Vec<_>, Vec<_>) = (0..stride)
            .map(|index| Self::shard(buffer_size, index + 1, stride))
            .unzip();
        (actors, ResourceClient::from_shards(senders))
    }

    fn shard(
        buffer_size: usize,
        first_id: u32,
        id_stride: u32,
    ) -> (Self, mpsc::Sender<ResourceRequest<T>>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let (done, finished) = mpsc::unbounded_channel();
        // Just the type name (e.g., "Movie" instead of "rental_service::model::movie::Movie")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        let actor = Self {
            receiver,
            store: HashMap::new(),
            lanes: HashMap::new(),
            done,
            finished,
            next_id: Some(first_id),
            id_stride,
            entity_type,
        };
        (actor, sender)
    }

    /// Runs the actor's event loop, processing messages until the channel closes and every
    /// write in flight has been answered.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = self.entity_type;
        let first_id = self.next_id;
        info!(entity_type, ?first_id, stride = self.id_stride, "Actor started");

        let context = Arc::new(context);
        let mut open = true;
        while open || !self.lanes.is_empty() {
            tokio::select! {
                msg = self.receiver.recv(), if open => match msg {
                    Some(msg) => self.handle(msg, &context).await,
                    None => open = false,
                },
                Some(finished) = self.finished.recv() => self.complete(finished, &context),
                else => break,
            }
        }

        info!(entity_type, ?first_id, size = self.store.len(), "Shutdown");
    }

    async fn handle(&mut self, msg: ResourceRequest<T>, context: &Arc<T::Context>) {
        let entity_type = self.entity_type;
        match msg {
            ResourceRequest::Create { params, respond_to } => {
                debug!(entity_type, ?params, "Create");
                let _ = respond_to.send(self.create(params, context).await);
            }
            ResourceRequest::Get { id, respond_to } => {
                let item = self.store.get(&id).cloned();
                let found = item.is_some();
                debug!(entity_type, %id, found, "Get");
                let _ = respond_to.send(Ok(item));
            }
            ResourceRequest::List { respond_to } => {
                debug!(entity_type, size = self.store.len(), "List");
                let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
            }
            ResourceRequest::Update {
                id,
                update,
                respond_to,
            } => {
                debug!(entity_type, %id, ?update, "Update");
                self.schedule(id, Write::Update { update, respond_to }, context);
            }
            ResourceRequest::Delete { id, respond_to } => {
                debug!(entity_type, %id, "Delete");
                self.schedule(id, Write::Delete { respond_to }, context);
            }
            ResourceRequest::Action {
                id,
                action,
                respond_to,
            } => {
                debug!(entity_type, %id, ?action, "Action");
                self.schedule(id, Write::Action { action, respond_to }, context);
            }
        }
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let entity_type = self.entity_type;
        let Some(sequence) = self.next_id else {
            warn!(entity_type, "Create refused, id space exhausted");
            return Err(FrameworkError::IdSpaceExhausted);
        };
        self.next_id = sequence.checked_add(self.id_stride);
        let id = T::Id::from(sequence);

        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            entity_error(e)
        })?;
        item.on_create(context).await.map_err(|e| {
            warn!(entity_type, error = %e, "on_create failed");
            entity_error(e)
        })?;
        self.store.insert(id.clone(), item.clone());
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(item)
    }

    /// Queues `write` behind the write already running for `id`, or starts it.
    fn schedule(&mut self, id: T::Id, write: Write<T>, context: &Arc<T::Context>) {
        if let Some(waiting) = self.lanes.get_mut(&id) {
            waiting.push_back(write);
            debug!(entity_type = self.entity_type, %id, queued = waiting.len(), "Write queued");
            return;
        }
        self.advance(id, VecDeque::from([write]), context);
    }

    /// Starts the first of `waiting` whose entity still exists. The lane for `id` stays
    /// taken while a write runs, and is freed once nothing is left to start.
    fn advance(
        &mut self,
        id: T::Id,
        mut waiting: VecDeque<Write<T>>,
        context: &Arc<T::Context>,
    ) {
        while let Some(write) = waiting.pop_front() {
            let Some(item) = self.store.get(&id) else {
                warn!(entity_type = self.entity_type, %id, "Not found");
                write.reject(FrameworkError::NotFound(id.to_string()));
                continue;
            };
            let lane = Lane {
                id: Some(id.clone()),
                done: self.done.clone(),
            };
            tokio::spawn(write.run(item.clone(), Arc::clone(context), lane));
            self.lanes.insert(id, waiting);
            return;
        }
    }

    fn complete(&mut self, finished: Finished<T>, context: &Arc<T::Context>) {
        let entity_type = self.entity_type;
        let Finished { id, outcome } = finished;
        match outcome {
            Some(Outcome::Updated(Ok(staged), respond_to)) => {
                self.store.insert(id.clone(), staged.clone());
                info!(entity_type, %id, "Updated");
                let _ = respond_to.send(Ok(staged));
            }
            Some(Outcome::Updated(Err(e), respond_to)) => {
                warn!(entity_type, %id, error = %e, "Update failed");
                let _ = respond_to.send(Err(e));
            }
            Some(Outcome::Deleted(Ok(()), respond_to)) => {
                let removed = self.store.remove(&id);
                info!(entity_type, %id, size = self.store.len(), "Deleted");
                let _ = respond_to
                    .send(removed.ok_or_else(|| FrameworkError::NotFound(id.to_string())));
            }
            Some(Outcome::Deleted(Err(e), respond_to)) => {
                warn!(entity_type, %id, error = %e, "on_delete failed");
                let _ = respond_to.send(Err(e));
            }
            Some(Outcome::Acted(Ok((staged, value)), respond_to)) => {
                self.store.insert(id.clone(), staged);
                info!(entity_type, %id, "Action ok");
                let _ = respond_to.send(Ok(value));
            }
            Some(Outcome::Acted(Err(e), respond_to)) => {
                warn!(entity_type, %id, error = %e, "Action failed");
                let _ = respond_to.send(Err(e));
            }
            None => warn!(entity_type, %id, "Write abandoned"),
        }

        let waiting = self.lanes.remove(&id).unwrap_or_default();
        self.advance(id, waiting, context);
    }
}
