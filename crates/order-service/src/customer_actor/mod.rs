//! # Customer Actor
//!
//! Manages customer records with plain CRUD. It has no dependencies
//! (`Context = ()`) and no custom actions; order creation only reads from it.
//!
//! ## Usage
//!
//! ```rust
//! use order_service::customer_actor;
//! use order_service::clients::CustomerClient;
//! use order_service::model::CustomerCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = customer_actor::new(32);
//!     let client = CustomerClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let params = CustomerCreate {
//!         name: "Ana".to_string(),
//!         email: "ana@example.com".to_string(),
//!     };
//!     let id = client.create_customer(params).await?;
//!     assert_eq!(id.to_string(), "customer_1");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Customer;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, ResourceClient<Customer>) {
    ResourceActor::new(buffer_size)
}
