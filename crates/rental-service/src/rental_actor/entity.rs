//! [`ActorEntity`] implementation for [`Rental`].

use super::error::RentalLedgerError;
use crate::model::{Rental, RentalDraft, RentalId, RentalUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

/// Rentals have no custom actions.
#[derive(Debug)]
pub enum RentalAction {}

#[async_trait]
impl ActorEntity for Rental {
    type Id = RentalId;
    type Create = RentalDraft;
    type Update = RentalUpdate;
    type Action = RentalAction;
    type ActionResult = ();
    type Context = ();
    type Error = RentalLedgerError;

    fn from_create_params(id: RentalId, draft: RentalDraft) -> Result<Self, Self::Error> {
        Ok(Rental::from_draft(id, draft))
    }

    async fn on_update(&mut self, update: RentalUpdate, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(&mut self, action: RentalAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
