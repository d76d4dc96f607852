//! # Product Actor
//!
//! Manages the product catalog and its stock levels.
//!
//! Stock is read in batches through [`ProductLookup`](crate::repositories::ProductLookup)
//! and written back in one all-or-nothing batch through
//! [`InventoryAdjuster`](crate::repositories::InventoryAdjuster), both implemented
//! by [`ProductClient`](crate::clients::ProductClient). `CheckStock` is the one
//! custom action.
//!
//! ```rust
//! use order_service::product_actor;
//! use order_service::clients::ProductClient;
//! use order_service::model::ProductCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let params = ProductCreate {
//!         name: "Widget".to_string(),
//!         price: 29.99,
//!         quantity: 100,
//!     };
//!     let id = client.create_product(params).await?;
//!     assert_eq!(client.check_stock(id).await?, 100);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Product;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
