//! Error types for the Customer actor.

use crate::model::ValidationError;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// The requested customer was not found.
    #[error("Customer not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CustomerError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => CustomerError::NotFound(id),
            e if e.is_transport() => CustomerError::ActorCommunicationError(e.to_string()),
            other => other
                .downcast_entity::<CustomerError>()
                .unwrap_or_else(|other| CustomerError::ActorCommunicationError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_errors_keep_their_type() {
        let validation = ValidationError::new("phone", "too short");
        let wrapped = FrameworkError::EntityError(Box::new(CustomerError::from(validation.clone())));
        assert_eq!(CustomerError::from(wrapped), CustomerError::Validation(validation));
    }

    #[test]
    fn transport_errors_become_communication_errors() {
        let err = CustomerError::from(FrameworkError::ActorClosed);
        assert!(matches!(err, CustomerError::ActorCommunicationError(_)));
    }
}
