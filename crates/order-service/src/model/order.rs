/// Represents a persisted customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on
/// creation parameters ([`NewOrder`]).
use crate::model::{Customer, CustomerId, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of an [`Order`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(format!("order_{}", id))
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One persisted line of an order. `line_no` starts at 1 and follows request order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub line_no: u32,
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: Customer,
    pub order_products: Vec<OrderLine>,
}

impl Order {
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer.id
    }

    /// Sum of `price * quantity` over all lines.
    pub fn total(&self) -> f64 {
        self.order_products
            .iter()
            .map(|line| line.price * f64::from(line.quantity))
            .sum()
    }
}

/// A priced line item ready to be persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: f64,
}

/// Payload for creating a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer: Customer,
    pub products: Vec<NewOrderLine>,
}
