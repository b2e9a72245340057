//! Error types for the Genre actor.

use crate::model::ValidationError;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during genre operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GenreError {
    /// The requested genre was not found.
    #[error("Genre not found: {0}")]
    NotFound(String),

    /// A field is outside its schema bounds.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for GenreError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => GenreError::NotFound(id),
            e if e.is_transport() => GenreError::ActorCommunicationError(e.to_string()),
            other => other
                .downcast_entity::<GenreError>()
                .unwrap_or_else(|other| GenreError::ActorCommunicationError(other.to_string())),
        }
    }
}
