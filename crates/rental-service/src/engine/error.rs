//! Outcomes of a failed rental.

use std::fmt;
use thiserror::Error;

/// Which reference in a rental request did not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Customer,
    Movie,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Customer => f.write_str("customer"),
            ReferenceKind::Movie => f.write_str("movie"),
        }
    }
}

/// Why `create_rental` did not produce a rental.
///
/// In every case nothing was written: no rental was appended and no stock was taken.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RentalError {
    /// The customer or movie does not exist. Retrying the same request cannot succeed.
    #[error("{kind} not found: {id}")]
    ReferenceNotFound { kind: ReferenceKind, id: String },

    /// No copies left. Retrying the same request cannot succeed.
    #[error("movie out of stock: {0}")]
    OutOfStock(crate::model::MovieId),

    /// A store could not be reached or the commit did not complete. Safe to retry as is.
    #[error("rental transaction failed: {0}")]
    TransactionFailed(String),
}

impl RentalError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, RentalError::TransactionFailed(_))
    }

    pub(crate) fn customer_not_found(id: impl ToString) -> Self {
        RentalError::ReferenceNotFound {
            kind: ReferenceKind::Customer,
            id: id.to_string(),
        }
    }

    pub(crate) fn movie_not_found(id: impl ToString) -> Self {
        RentalError::ReferenceNotFound {
            kind: ReferenceKind::Movie,
            id: id.to_string(),
        }
    }
}
