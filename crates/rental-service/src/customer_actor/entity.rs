//! [`ActorEntity`] implementation for [`Customer`].

use super::error::CustomerError;
use crate::model::{
    validate_customer_name, validate_phone, Customer, CustomerCreate, CustomerId, CustomerUpdate,
};
use actor_framework::ActorEntity;
use async_trait::async_trait;

/// Customers have no custom actions.
#[derive(Debug)]
pub enum CustomerAction {}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = CustomerAction;
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        Ok(Customer::new(id, params)?)
    }

    /// Updates `name`, `phone` and `is_gold`; each is validated when present.
    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            validate_customer_name(&name)?;
            self.name = name;
        }
        if let Some(phone) = update.phone {
            validate_phone(&phone)?;
            self.phone = phone;
        }
        if let Some(is_gold) = update.is_gold {
            self.is_gold = is_gold;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CustomerAction,
        _ctx: &(),
    ) -> Result<(), Self::Error> {
        match action {}
    }
}
