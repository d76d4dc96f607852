//! # Resource Actor
//!
//! Building blocks for type-safe, resource-oriented actors on Tokio.
//!
//! Each resource type (a customer, a product, an order) gets one actor task that
//! owns its store and processes requests sequentially. Everything else talks to
//! it through a cloneable [`ResourceClient`]. The request set is the CRUD
//! lifecycle plus batched reads and writes and entity-specific actions.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the domain model and its lifecycle hooks
//! 2. **Runtime** ([`ResourceActor`]) - the message loop and the store
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed request/response calls
//!
//! ## Context injection
//!
//! Dependencies are handed to [`ResourceActor::run`] instead of the constructor,
//! so actors can be created first and wired afterwards:
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor, ResourceClient};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Product { id: u32, stock: u32 }
//! #[derive(Debug)] struct ProductCreate { stock: u32 }
//! #[derive(Debug, thiserror::Error)] #[error("product error")] struct ProductError;
//!
//! #[async_trait]
//! impl ActorEntity for Product {
//!     type Id = u32; type Create = ProductCreate; type Update = (); type Action = ();
//!     type ActionResult = (); type Context = (); type Error = ProductError;
//!     fn from_create_params(id: u32, p: ProductCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, stock: p.stock })
//!     }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[derive(Clone, Debug)] struct Basket { id: u32, products: Vec<Product> }
//! #[derive(Debug)] struct BasketCreate { product_ids: Vec<u32> }
//! #[derive(Debug, thiserror::Error)] #[error("basket error")] struct BasketError;
//!
//! #[async_trait]
//! impl ActorEntity for Basket {
//!     type Id = u32; type Create = BasketCreate; type Update = (); type Action = ();
//!     type ActionResult = (); type Error = BasketError;
//!     type Context = ResourceClient<Product>;
//!
//!     fn from_create_params(id: u32, _: BasketCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, products: Vec::new() })
//!     }
//!     async fn on_update(&mut self, _: (), _: &Self::Context) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &Self::Context) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (product_actor, products) = ResourceActor::<Product>::new(10);
//!     let (basket_actor, baskets) = ResourceActor::<Basket>::new(10);
//!
//!     tokio::spawn(product_actor.run(()));
//!     tokio::spawn(basket_actor.run(products.clone()));
//!
//!     let first = products.create(ProductCreate { stock: 3 }).await.unwrap();
//!     let found = products.get_many(vec![first, 42]).await.unwrap();
//!     assert_eq!(found.len(), 1);
//!
//!     let _ = baskets.create(BasketCreate { product_ids: vec![first] }).await;
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Requests to one actor are processed one at a time, so a batched request is
//!   atomic with respect to that actor
//! - Nothing spans actors: a sequence of calls to different actors is not a transaction
//!
//! ## Testing
//!
//! [`mock`] provides a queued-reply [`MockClient`](mock::MockClient) and
//! receiver-driven helpers for asserting request payloads without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
