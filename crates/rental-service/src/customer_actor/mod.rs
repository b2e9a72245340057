//! # Customer Actor
//!
//! CRUD store for [`Customer`](crate::model::Customer). The rental engine only reads from it.
//!
//! ```rust
//! use rental_service::clients::CustomerClient;
//! use rental_service::customer_actor;
//! use rental_service::model::CustomerCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = customer_actor::new(32);
//!     let client = CustomerClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let customer = client
//!         .create_customer(CustomerCreate {
//!             name: "Grace Hopper".to_string(),
//!             phone: "555-0199".to_string(),
//!             is_gold: false,
//!         })
//!         .await?;
//!     assert_eq!(customer.id.to_string(), "customer_1");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use entity::CustomerAction;
pub use error::*;

use crate::model::Customer;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, ResourceClient<Customer>) {
    ResourceActor::new(buffer_size)
}
