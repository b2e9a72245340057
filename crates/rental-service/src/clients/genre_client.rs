//! # Genre Client
//!
//! Provides a high‑level API for interacting with the `Genre` actor.
use crate::genre_actor::GenreError;
use crate::model::{Genre, GenreCreate, GenreId, GenreUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Genre actor.
#[derive(Clone)]
pub struct GenreClient {
    inner: ResourceClient<Genre>,
}

impl GenreClient {
    pub fn new(inner: ResourceClient<Genre>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Genre> for GenreClient {
    type Error = GenreError;

    fn inner(&self) -> &ResourceClient<Genre> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}

impl GenreClient {
    #[instrument(skip(self))]
    pub async fn create_genre(&self, params: GenreCreate) -> Result<Genre, GenreError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_genre(&self, id: GenreId, update: GenreUpdate) -> Result<Genre, GenreError> {
        debug!("Sending request");
        Ok(self.inner.update(id, update).await?)
    }

    /// All genres, by name.
    #[instrument(skip(self))]
    pub async fn list_genres(&self) -> Result<Vec<Genre>, GenreError> {
        let mut genres = self.list().await?;
        genres.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(genres)
    }
}
