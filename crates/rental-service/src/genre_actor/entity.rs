//! [`ActorEntity`] implementation for [`Genre`].

use super::error::GenreError;
use crate::model::{validate_genre_name, Genre, GenreCreate, GenreId, GenreUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

/// Genres have no custom actions.
#[derive(Debug)]
pub enum GenreAction {}

#[async_trait]
impl ActorEntity for Genre {
    type Id = GenreId;
    type Create = GenreCreate;
    type Update = GenreUpdate;
    type Action = GenreAction;
    type ActionResult = ();
    type Context = ();
    type Error = GenreError;

    fn from_create_params(id: GenreId, params: GenreCreate) -> Result<Self, Self::Error> {
        Ok(Genre::new(id, params)?)
    }

    async fn on_update(&mut self, update: GenreUpdate, _ctx: &()) -> Result<(), Self::Error> {
        validate_genre_name(&update.name)?;
        self.name = update.name;
        Ok(())
    }

    async fn handle_action(&mut self, action: GenreAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
