//! # Rental Client
//!
//! Provides a high‑level API for the rental ledger. Appending is reserved for the movie
//! actor's check-out; everything else here is read-only.
use crate::model::{Rental, RentalDraft};
use crate::rental_actor::RentalLedgerError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the rental ledger.
#[derive(Clone)]
pub struct RentalClient {
    inner: ResourceClient<Rental>,
}

impl RentalClient {
    pub fn new(inner: ResourceClient<Rental>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Rental> for RentalClient {
    type Error = RentalLedgerError;

    fn inner(&self) -> &ResourceClient<Rental> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}

impl RentalClient {
    /// Appends a rental, returning it with its id and `date_out`.
    ///
    /// On error nothing was stored.
    #[instrument(skip(self, draft), fields(customer_id = %draft.customer.id, movie_id = %draft.movie.id))]
    pub async fn append_rental(&self, draft: RentalDraft) -> Result<Rental, RentalLedgerError> {
        debug!("Sending request");
        Ok(self.inner.create(draft).await?)
    }

    /// All rentals, most recent `date_out` first.
    #[instrument(skip(self))]
    pub async fn list_rentals(&self) -> Result<Vec<Rental>, RentalLedgerError> {
        let mut rentals = self.list().await?;
        rentals.sort_by(|a, b| b.date_out.cmp(&a.date_out).then(b.id.cmp(&a.id)));
        Ok(rentals)
    }
}
