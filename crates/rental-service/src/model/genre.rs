use super::validation::{text_length, ValidationError};
use super::GenreId;
use serde::{Deserialize, Serialize};

pub const GENRE_NAME_MIN: usize = 5;
pub const GENRE_NAME_MAX: usize = 50;

/// A movie genre ("Comedy", "Thriller", ...).
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](actor_framework::ResourceActor); see
/// [`genre_actor`](crate::genre_actor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

impl Genre {
    pub fn new(id: GenreId, params: GenreCreate) -> Result<Self, ValidationError> {
        validate_genre_name(&params.name)?;
        Ok(Self {
            id,
            name: params.name,
        })
    }

    /// Copy of the fields a movie embeds.
    pub fn snapshot(&self) -> GenreSnapshot {
        GenreSnapshot {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Genre fields copied into a [`Movie`](super::Movie). Never kept in sync with the genre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreSnapshot {
    pub id: GenreId,
    pub name: String,
}

/// Payload for creating a genre.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreCreate {
    pub name: String,
}

/// Payload for renaming a genre.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreUpdate {
    pub name: String,
}

pub fn validate_genre_name(name: &str) -> Result<(), ValidationError> {
    text_length("name", name, GENRE_NAME_MIN, GENRE_NAME_MAX)
}
