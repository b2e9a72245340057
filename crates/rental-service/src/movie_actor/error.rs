//! Error types for the Movie actor.

use crate::model::{GenreId, MovieId, ValidationError};
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during movie operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MovieError {
    /// The requested movie was not found.
    #[error("Movie not found: {0}")]
    NotFound(String),

    /// The genre named by a create or update does not exist.
    #[error("Invalid genre: {0}")]
    InvalidGenre(GenreId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No copies left to rent.
    #[error("Movie out of stock: {0}")]
    OutOfStock(MovieId),

    /// The rental could not be appended; stock was not touched.
    #[error("Rental ledger unavailable: {0}")]
    LedgerUnavailable(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for MovieError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => MovieError::NotFound(id),
            e if e.is_transport() => MovieError::ActorCommunicationError(e.to_string()),
            other => other
                .downcast_entity::<MovieError>()
                .unwrap_or_else(|other| MovieError::ActorCommunicationError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_stock_survives_the_actor_boundary() {
        let wrapped = FrameworkError::EntityError(Box::new(MovieError::OutOfStock(MovieId(3))));
        assert_eq!(MovieError::from(wrapped), MovieError::OutOfStock(MovieId(3)));
    }

    #[test]
    fn missing_movie_maps_to_not_found() {
        let err = MovieError::from(FrameworkError::NotFound("movie_9".into()));
        assert_eq!(err, MovieError::NotFound("movie_9".into()));
    }

    #[test]
    fn foreign_entity_errors_are_communication_errors() {
        let wrapped = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        assert!(matches!(
            MovieError::from(wrapped),
            MovieError::ActorCommunicationError(msg) if msg.contains("disk")
        ));
    }

    #[test]
    fn transport_failures_are_communication_errors() {
        for failure in [FrameworkError::ActorClosed, FrameworkError::ActorDropped] {
            assert!(matches!(
                MovieError::from(failure),
                MovieError::ActorCommunicationError(_)
            ));
        }
    }
}
