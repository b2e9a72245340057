//! The movie catalogue entry and the stock counter the rental engine decrements.
//!
//! Callers describe the genre by id ([`MovieCreate`], [`MovieUpdate`]). The movie client
//! resolves that id and hands the actor a [`MovieParams`] / [`MovieChanges`] carrying the
//! genre snapshot, so the actor itself never talks to the genre store.

use super::genre::GenreSnapshot;
use super::validation::{number_range, text_length, ValidationError};
use super::{GenreId, MovieId};
use serde::{Deserialize, Serialize};

pub const TITLE_MAX: usize = 255;
pub const RATE_MAX: f64 = 255.0;

/// A movie title held in stock.
///
/// # Actor Framework
/// Managed by a sharded [`ResourceActor`](actor_framework::ResourceActor); see
/// [`movie_actor`](crate::movie_actor) for the stock actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genre: GenreSnapshot,
    pub number_in_stock: u8,
    pub daily_rental_rate: f64,
}

impl Movie {
    pub fn new(id: MovieId, params: MovieParams) -> Result<Self, ValidationError> {
        let title = normalize_title(&params.title)?;
        validate_rate(params.daily_rental_rate)?;
        Ok(Self {
            id,
            title,
            genre: params.genre,
            number_in_stock: params.number_in_stock,
            daily_rental_rate: params.daily_rental_rate,
        })
    }

    /// Validates every field first, then applies them together.
    pub fn apply(&mut self, changes: MovieChanges) -> Result<(), ValidationError> {
        let title = changes.title.as_deref().map(normalize_title).transpose()?;
        if let Some(rate) = changes.daily_rental_rate {
            validate_rate(rate)?;
        }

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(genre) = changes.genre {
            self.genre = genre;
        }
        if let Some(stock) = changes.number_in_stock {
            self.number_in_stock = stock;
        }
        if let Some(rate) = changes.daily_rental_rate {
            self.daily_rental_rate = rate;
        }
        Ok(())
    }

    /// Copy of the fields a rental records.
    pub fn snapshot(&self) -> MovieSnapshot {
        MovieSnapshot {
            id: self.id,
            title: self.title.clone(),
            daily_rental_rate: self.daily_rental_rate,
        }
    }
}

/// Movie fields captured by a [`Rental`](super::Rental) at rental time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSnapshot {
    pub id: MovieId,
    pub title: String,
    pub daily_rental_rate: f64,
}

/// Payload for creating a movie, as supplied by callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieCreate {
    pub title: String,
    pub genre_id: GenreId,
    pub number_in_stock: u8,
    pub daily_rental_rate: f64,
}

/// Payload for updating a movie. `None` leaves the field as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub genre_id: Option<GenreId>,
    pub number_in_stock: Option<u8>,
    pub daily_rental_rate: Option<f64>,
}

/// [`MovieCreate`] with the genre resolved.
#[derive(Debug, Clone)]
pub struct MovieParams {
    pub title: String,
    pub genre: GenreSnapshot,
    pub number_in_stock: u8,
    pub daily_rental_rate: f64,
}

impl MovieParams {
    pub fn new(params: MovieCreate, genre: GenreSnapshot) -> Self {
        Self {
            title: params.title,
            genre,
            number_in_stock: params.number_in_stock,
            daily_rental_rate: params.daily_rental_rate,
        }
    }
}

/// [`MovieUpdate`] with the genre, if any, resolved.
#[derive(Debug, Clone, Default)]
pub struct MovieChanges {
    pub title: Option<String>,
    pub genre: Option<GenreSnapshot>,
    pub number_in_stock: Option<u8>,
    pub daily_rental_rate: Option<f64>,
}

impl MovieChanges {
    pub fn new(update: MovieUpdate, genre: Option<GenreSnapshot>) -> Self {
        Self {
            title: update.title,
            genre,
            number_in_stock: update.number_in_stock,
            daily_rental_rate: update.daily_rental_rate,
        }
    }
}

/// Trims surrounding whitespace and checks the 1..=255 character bound.
pub fn normalize_title(title: &str) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    text_length("title", trimmed, 1, TITLE_MAX)?;
    Ok(trimmed.to_string())
}

pub fn validate_rate(rate: f64) -> Result<(), ValidationError> {
    number_range("daily_rental_rate", rate, 0.0, RATE_MAX)
}
