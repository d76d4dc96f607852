//! # Order Service
//!
//! Order creation on top of [`resource_actor`]: customers, products and orders
//! each live in their own actor, and [`services::CreateOrderService`] turns a
//! purchase request into a persisted order with the matching stock decrement.
//!
//! - **[model]**: Data structures ([`Customer`](model::Customer), [`Product`](model::Product), [`Order`](model::Order)) that implement `ActorEntity`.
//! - **[clients]**: Typed wrappers around the actor channels.
//! - **[repositories]**: The data-access traits the workflow depends on.
//! - **[services]**: The order creation workflow and its error type.
//! - **[lifecycle]**: [`OrderSystem`](lifecycle::OrderSystem) and [`SystemConfig`](lifecycle::SystemConfig).

pub mod clients;
pub mod customer_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod repositories;
pub mod services;
