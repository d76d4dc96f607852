//! [`ActorEntity`] implementation for [`Order`].
//!
//! Orders are write-once: the actor assigns the id and line numbers on create,
//! and the only other operations are reads and deletes.

use super::OrderError;
use crate::model::{NewOrder, Order, OrderId, OrderLine};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = NewOrder;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = OrderError;

    /// Builds the persisted order, numbering lines from 1 in the given order.
    fn from_create_params(id: OrderId, params: NewOrder) -> Result<Self, Self::Error> {
        if params.products.is_empty() {
            return Err(OrderError::ValidationError(
                "an order needs at least one line".to_string(),
            ));
        }
        if let Some(line) = params.products.iter().find(|line| line.quantity == 0) {
            return Err(OrderError::ValidationError(format!(
                "quantity for {} must be positive",
                line.product_id
            )));
        }

        let order_products = params
            .products
            .into_iter()
            .zip(1..)
            .map(|(line, line_no)| OrderLine {
                line_no,
                product_id: line.product_id,
                quantity: line.quantity,
                price: line.price,
            })
            .collect();

        Ok(Self {
            id,
            customer: params.customer,
            order_products,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Err(OrderError::ValidationError(
            "orders cannot be modified".to_string(),
        ))
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}
