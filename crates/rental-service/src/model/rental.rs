use super::customer::CustomerSnapshot;
use super::movie::MovieSnapshot;
use super::RentalId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rental as recorded in the ledger.
///
/// The customer and movie are copied in when the rental is committed, so the record stays
/// the same when either live record changes later. Rentals are create-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub id: RentalId,
    pub date_out: DateTime<Utc>,
    /// Returns are not handled; always `None`.
    pub date_returned: Option<DateTime<Utc>>,
    pub customer: CustomerSnapshot,
    pub movie: MovieSnapshot,
}

impl Rental {
    /// Stamps `date_out` with the current time.
    pub fn from_draft(id: RentalId, draft: RentalDraft) -> Self {
        Self {
            id,
            date_out: Utc::now(),
            date_returned: None,
            customer: draft.customer,
            movie: draft.movie,
        }
    }
}

/// Snapshots for a rental that has not been appended yet.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalDraft {
    pub customer: CustomerSnapshot,
    pub movie: MovieSnapshot,
}

/// Rentals cannot be updated. This type has no values.
#[derive(Debug, Clone)]
pub enum RentalUpdate {}
