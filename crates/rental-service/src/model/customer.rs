use super::validation::{text_length, ValidationError};
use super::CustomerId;
use serde::{Deserialize, Serialize};

/// A customer of the shop.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](actor_framework::ResourceActor); see
/// [`customer_actor`](crate::customer_actor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub is_gold: bool,
}

impl Customer {
    pub fn new(id: CustomerId, params: CustomerCreate) -> Result<Self, ValidationError> {
        validate_customer_name(&params.name)?;
        validate_phone(&params.phone)?;
        Ok(Self {
            id,
            name: params.name,
            phone: params.phone,
            is_gold: params.is_gold,
        })
    }

    /// Copy of the fields a rental records.
    pub fn snapshot(&self) -> CustomerSnapshot {
        CustomerSnapshot {
            id: self.id,
            name: self.name.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Customer fields captured by a [`Rental`](super::Rental) at rental time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSnapshot {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
}

/// Payload for creating a customer. `is_gold` defaults to `false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub is_gold: bool,
}

/// Payload for updating a customer. `None` leaves the field as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub is_gold: Option<bool>,
}

pub fn validate_customer_name(name: &str) -> Result<(), ValidationError> {
    text_length("name", name, 3, 50)
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    text_length("phone", phone, 5, 50)
}
