//! Error types for the rental ledger.

use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RentalLedgerError {
    /// The requested rental was not found.
    #[error("Rental not found: {0}")]
    NotFound(String),

    /// The ledger could not be reached, or did not answer.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for RentalLedgerError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => RentalLedgerError::NotFound(id),
            e if e.is_transport() => RentalLedgerError::ActorCommunicationError(e.to_string()),
            other => other
                .downcast_entity::<RentalLedgerError>()
                .unwrap_or_else(|other| RentalLedgerError::ActorCommunicationError(other.to_string())),
        }
    }
}
