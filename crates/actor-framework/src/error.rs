//! # Framework Errors
//!
//! Common error types used throughout the actor framework. Entity-specific failures travel
//! inside [`FrameworkError::EntityError`] and can be recovered with
//! [`FrameworkError::downcast_entity`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// The actor has handed out every id it owns; the create was not stored.
    #[error("Id space exhausted")]
    IdSpaceExhausted,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// True when the request never reached, or never came back from, the actor.
    ///
    /// The actor inserts and answers in one synchronous step, so a transport failure on
    /// create means nothing was stored.
    pub fn is_transport(&self) -> bool {
        matches!(self, FrameworkError::ActorClosed | FrameworkError::ActorDropped)
    }

    /// Recovers the entity's typed error, or hands `self` back unchanged.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(typed) => Ok(*typed),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}
