//! # Create Order
//!
//! Validates a purchase request against the customer and product stores,
//! prices it from the product snapshots, persists it, and writes the reduced
//! stock levels back.
//!
//! All checks run against one snapshot of the products, read in a single batched
//! call. Nothing is re-read before the writes, so two concurrent requests for the
//! same stock can both pass validation.

use super::CreateOrderError;
use crate::model::{
    CustomerId, NewOrder, NewOrderLine, Order, Product, ProductId, QuantityAdjustment,
};
use crate::repositories::{CustomerLookup, InventoryAdjuster, OrderStore, ProductLookup};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// One requested product and how many units of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineRequest {
    pub id: ProductId,
    pub quantity: u32,
}

impl OrderLineRequest {
    pub fn new(id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            quantity,
        }
    }
}

/// Input of [`CreateOrderService::execute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: CustomerId,
    pub products: Vec<OrderLineRequest>,
}

impl CreateOrderRequest {
    /// Rejects shapes no store lookup could make valid: no lines, zero
    /// quantities, and the same product on two lines.
    fn validate(&self) -> Result<(), CreateOrderError> {
        if self.products.is_empty() {
            return Err(CreateOrderError::EmptyOrder);
        }
        let mut seen = HashSet::with_capacity(self.products.len());
        for line in &self.products {
            if line.quantity == 0 {
                return Err(CreateOrderError::InvalidQuantity(line.id.clone()));
            }
            if !seen.insert(&line.id) {
                return Err(CreateOrderError::DuplicateProduct(line.id.clone()));
            }
        }
        Ok(())
    }
}

/// The order creation workflow.
///
/// Collaborators are passed in explicitly;
/// [`OrderSystem::create_order_service`](crate::lifecycle::OrderSystem::create_order_service)
/// wires the actor-backed ones.
#[derive(Clone)]
pub struct CreateOrderService {
    orders: Arc<dyn OrderStore>,
    products: Arc<dyn ProductLookup>,
    customers: Arc<dyn CustomerLookup>,
    inventory: Arc<dyn InventoryAdjuster>,
}

impl CreateOrderService {
    pub fn new(
        orders: Arc<dyn OrderStore>,
        products: Arc<dyn ProductLookup>,
        customers: Arc<dyn CustomerLookup>,
        inventory: Arc<dyn InventoryAdjuster>,
    ) -> Self {
        Self {
            orders,
            products,
            customers,
            inventory,
        }
    }

    /// Creates an order.
    ///
    /// Violations are reported for the first offending line in request order.
    /// If the stock cannot be adjusted after the order was stored, the order is
    /// deleted again and [`CreateOrderError::InventoryAdjustment`] or
    /// [`CreateOrderError::UnexpectedOrderLine`] is returned.
    #[instrument(
        skip(self, request),
        fields(customer_id = %request.customer_id, lines = request.products.len())
    )]
    pub async fn execute(&self, request: CreateOrderRequest) -> Result<Order, CreateOrderError> {
        request.validate()?;

        let customer = self
            .customers
            .find_by_id(&request.customer_id)
            .await?
            .ok_or_else(|| CreateOrderError::CustomerNotFound(request.customer_id.clone()))?;
        debug!(?customer, "Customer resolved");

        let ids: Vec<ProductId> = request.products.iter().map(|line| line.id.clone()).collect();
        let snapshots = self.products.find_all_by_id(&ids).await?;
        if snapshots.is_empty() {
            return Err(CreateOrderError::NoProductsFound);
        }
        let by_id: HashMap<&ProductId, &Product> =
            snapshots.iter().map(|product| (&product.id, product)).collect();

        let priced = price_lines(&request.products, &by_id)?;

        let order = self
            .orders
            .create(NewOrder {
                customer,
                products: priced,
            })
            .await?;
        info!(order_id = %order.id, total = order.total(), "Order created");

        let adjustments = match quantity_adjustments(&order, &by_id) {
            Ok(adjustments) => adjustments,
            Err(product_id) => {
                warn!(order_id = %order.id, %product_id, "Persisted line has no snapshot");
                let rolled_back = self.roll_back(&order).await;
                return Err(CreateOrderError::UnexpectedOrderLine {
                    order_id: order.id,
                    product_id,
                    rolled_back,
                });
            }
        };
        if let Err(source) = self.inventory.update_quantity(&adjustments).await {
            warn!(order_id = %order.id, error = %source, "Inventory update failed");
            let rolled_back = self.roll_back(&order).await;
            return Err(CreateOrderError::InventoryAdjustment {
                order_id: order.id,
                rolled_back,
                source,
            });
        }
        info!(order_id = %order.id, products = adjustments.len(), "Inventory adjusted");

        Ok(order)
    }

    /// Deletes an order whose stock could not be adjusted. Returns whether the delete succeeded.
    async fn roll_back(&self, order: &Order) -> bool {
        match self.orders.delete(&order.id).await {
            Ok(()) => {
                info!(order_id = %order.id, "Order deleted");
                true
            }
            Err(e) => {
                error!(
                    order_id = %order.id,
                    error = %e,
                    "Could not delete order; stock was not decremented"
                );
                false
            }
        }
    }
}

/// Checks existence and stock for every line, then attaches snapshot prices.
fn price_lines(
    lines: &[OrderLineRequest],
    snapshots: &HashMap<&ProductId, &Product>,
) -> Result<Vec<NewOrderLine>, CreateOrderError> {
    if let Some(missing) = lines.iter().find(|line| !snapshots.contains_key(&line.id)) {
        return Err(CreateOrderError::ProductNotFound(missing.id.clone()));
    }

    lines
        .iter()
        .map(|line| {
            let product = snapshots[&line.id];
            if line.quantity > product.quantity {
                return Err(CreateOrderError::InsufficientStock {
                    product_id: line.id.clone(),
                    requested: line.quantity,
                });
            }
            Ok(NewOrderLine {
                product_id: line.id.clone(),
                quantity: line.quantity,
                price: product.price,
            })
        })
        .collect()
}

/// New stock level per persisted line: snapshot quantity minus ordered quantity.
///
/// Fails with the product id of the first line that has no snapshot.
fn quantity_adjustments(
    order: &Order,
    snapshots: &HashMap<&ProductId, &Product>,
) -> Result<Vec<QuantityAdjustment>, ProductId> {
    order
        .order_products
        .iter()
        .map(|line| match snapshots.get(&line.product_id) {
            Some(product) => Ok(QuantityAdjustment {
                product_id: line.product_id.clone(),
                quantity: product.quantity.saturating_sub(line.quantity),
            }),
            None => Err(line.product_id.clone()),
        })
        .collect()
}
