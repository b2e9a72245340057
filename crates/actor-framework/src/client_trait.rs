//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `get`, `list`
//! and `delete` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read and delete operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Member { id: u32 }
/// #[derive(Debug)] struct MemberCreate;
/// #[derive(Debug)] struct MemberUpdate;
/// #[derive(Debug)] enum MemberAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct MemberError(String);
///
/// #[async_trait]
/// impl ActorEntity for Member {
///     type Id = u32; type Create = MemberCreate; type Update = MemberUpdate;
///     type Action = MemberAction; type ActionResult = (); type Context = (); type Error = MemberError;
///     fn from_create_params(id: u32, _: MemberCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: MemberUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: MemberAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct MemberClient { inner: ResourceClient<Member> }
///
/// #[async_trait]
/// impl ActorClient<Member> for MemberClient {
///     type Error = MemberError;
///     fn inner(&self) -> &ResourceClient<Member> { &self.inner }
///     fn map_error(e: FrameworkError) -> Self::Error { MemberError(e.to_string()) }
/// }
///
/// async fn usage(client: MemberClient) {
///     // get(), list() and delete() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, unordered.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID, returning what was removed.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
