//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient).
//!
//! Each client maps [`FrameworkError`](resource_actor::FrameworkError) into its
//! resource's error type and implements the collaborator traits from
//! [`repositories`](crate::repositories).

pub mod customer_client;
pub mod order_client;
pub mod product_client;

pub use customer_client::*;
pub use order_client::*;
pub use product_client::*;
