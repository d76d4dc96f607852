//! Error type for the order creation workflow.

use crate::customer_actor::CustomerError;
use crate::model::{CustomerId, OrderId, ProductId};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use thiserror::Error;

/// Why an order could not be created.
///
/// Validation variants are raised before any write and are safe to show to the
/// caller as-is. The collaborator variants wrap failures of the stores themselves.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CreateOrderError {
    #[error("An order must contain at least one product")]
    EmptyOrder,

    #[error("Quantity for product {0} must be at least 1")]
    InvalidQuantity(ProductId),

    #[error("Product {0} appears more than once in the order")]
    DuplicateProduct(ProductId),

    #[error("Could not find a customer with id {0}")]
    CustomerNotFound(CustomerId),

    #[error("None of the requested products exist")]
    NoProductsFound,

    #[error("Product {0} not found")]
    ProductNotFound(ProductId),

    #[error("Quantity {requested} is not available for product {product_id}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
    },

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Order(#[from] OrderError),

    /// The order store returned a line for a product that was not in the
    /// snapshot, so its stock cannot be adjusted. The order is deleted again.
    #[error("Order {order_id} has unrequested product {product_id} (rolled back: {rolled_back})")]
    UnexpectedOrderLine {
        order_id: OrderId,
        product_id: ProductId,
        rolled_back: bool,
    },

    /// The order was written but the stock update failed. `rolled_back` tells
    /// whether the order was deleted again.
    #[error("Inventory update failed for order {order_id} (rolled back: {rolled_back}): {source}")]
    InventoryAdjustment {
        order_id: OrderId,
        rolled_back: bool,
        #[source]
        source: ProductError,
    },
}

impl CreateOrderError {
    /// True for the user-facing, non-retryable rejections of the request itself.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CreateOrderError::EmptyOrder
                | CreateOrderError::InvalidQuantity(_)
                | CreateOrderError::DuplicateProduct(_)
                | CreateOrderError::CustomerNotFound(_)
                | CreateOrderError::NoProductsFound
                | CreateOrderError::ProductNotFound(_)
                | CreateOrderError::InsufficientStock { .. }
        )
    }
}
