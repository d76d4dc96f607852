//! # Collaborator Contracts
//!
//! The data-access capabilities the order workflow depends on. Each trait is
//! object safe so the workflow can hold `Arc<dyn …>` collaborators; the actor
//! clients in [`clients`](crate::clients) are the production implementations.

use crate::customer_actor::CustomerError;
use crate::model::{
    Customer, CustomerId, NewOrder, Order, OrderId, Product, ProductId, QuantityAdjustment,
};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use async_trait::async_trait;

/// Resolves customer ids to customer records.
#[async_trait]
pub trait CustomerLookup: Send + Sync {
    /// `Ok(None)` when no customer has this id.
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError>;
}

/// Reads product snapshots.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// Returns the products that exist among `ids`, in the order of `ids`.
    /// Unknown ids are omitted without error.
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, ProductError>;
}

/// Persists orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Stores the order and returns it with its generated id and line records.
    async fn create(&self, order: NewOrder) -> Result<Order, OrderError>;

    /// Removes an order. Used to undo a create whose follow-up writes failed.
    async fn delete(&self, id: &OrderId) -> Result<(), OrderError>;
}

/// Writes new available quantities back to the catalog.
#[async_trait]
pub trait InventoryAdjuster: Send + Sync {
    /// Applies every adjustment or none of them.
    async fn update_quantity(&self, adjustments: &[QuantityAdjustment]) -> Result<(), ProductError>;
}
