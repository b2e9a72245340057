//! # Customer Client
//!
//! Provides a high‑level API for interacting with the `Customer` actor.
use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}

impl CustomerClient {
    #[instrument(skip(self))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        Ok(self.inner.update(id, update).await?)
    }

    /// All customers, by name.
    #[instrument(skip(self))]
    pub async fn list_customers(&self) -> Result<Vec<Customer>, CustomerError> {
        let mut customers = self.list().await?;
        customers.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(customers)
    }
}
