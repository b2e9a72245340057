//! [`ActorEntity`] implementation for [`Movie`], including the check-out that commits a
//! rental.

use super::actions::{MovieAction, MovieActionResult};
use super::error::MovieError;
use crate::clients::RentalClient;
use crate::model::{Movie, MovieChanges, MovieId, MovieParams, Rental, RentalDraft};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::{debug, info, warn};

#[async_trait]
impl ActorEntity for Movie {
    type Id = MovieId;
    type Create = MovieParams;
    type Update = MovieChanges;
    type Action = MovieAction;
    type ActionResult = MovieActionResult;
    /// The rental ledger, appended to on check-out.
    type Context = RentalClient;
    type Error = MovieError;

    fn from_create_params(id: MovieId, params: MovieParams) -> Result<Self, Self::Error> {
        Ok(Movie::new(id, params)?)
    }

    async fn on_update(
        &mut self,
        changes: MovieChanges,
        _ledger: &RentalClient,
    ) -> Result<(), Self::Error> {
        Ok(self.apply(changes)?)
    }

    async fn handle_action(
        &mut self,
        action: MovieAction,
        ledger: &RentalClient,
    ) -> Result<MovieActionResult, Self::Error> {
        match action {
            MovieAction::CheckStock => Ok(MovieActionResult::CheckStock(self.number_in_stock)),
            MovieAction::DecrementStockIfPositive => {
                self.number_in_stock = self.stock_after_one_out()?;
                Ok(MovieActionResult::DecrementStockIfPositive(self.number_in_stock))
            }
            MovieAction::CheckOut(draft) => {
                self.check_out(draft, ledger).await.map(MovieActionResult::CheckOut)
            }
        }
    }
}

impl Movie {
    fn stock_after_one_out(&self) -> Result<u8, MovieError> {
        self.number_in_stock
            .checked_sub(1)
            .ok_or(MovieError::OutOfStock(self.id))
    }

    /// Appends first, decrements second. The decrement cannot fail once the append has
    /// succeeded, and nothing else touches this movie in between.
    async fn check_out(
        &mut self,
        draft: RentalDraft,
        ledger: &RentalClient,
    ) -> Result<Rental, MovieError> {
        let remaining = match self.stock_after_one_out() {
            Ok(remaining) => remaining,
            Err(e) => {
                debug!(movie_id = %self.id, "Check-out refused, no copies left");
                return Err(e);
            }
        };

        let draft = RentalDraft {
            movie: self.snapshot(),
            ..draft
        };
        let rental = ledger.append_rental(draft).await.map_err(|e| {
            warn!(movie_id = %self.id, error = %e, "Rental append failed, stock untouched");
            MovieError::LedgerUnavailable(e.to_string())
        })?;

        self.number_in_stock = remaining;
        info!(movie_id = %self.id, rental_id = %rental.id, stock = remaining, "Checked out");
        Ok(rental)
    }
}
