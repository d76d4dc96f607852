//! # Order Client
//!
//! High-level API for the `Order` actor and the production [`OrderStore`].
use crate::model::{NewOrder, Order, OrderId};
use crate::order_actor::OrderError;
use crate::repositories::OrderStore;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            // Validation failures raised by the entity keep their own variant.
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(order_error) => *order_error,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl OrderStore for OrderClient {
    /// Creates the order, then reads it back so callers get the generated lines.
    #[instrument(
        skip(self, order),
        fields(customer_id = %order.customer.id, lines = order.products.len())
    )]
    async fn create(&self, order: NewOrder) -> Result<Order, OrderError> {
        debug!(?order, "create called");
        let id = self.inner.create(order).await.map_err(Self::map_error)?;
        info!(order_id = %id, "Order persisted");
        self.get(id.clone())
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &OrderId) -> Result<(), OrderError> {
        ActorClient::delete(self, id.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Customer, NewOrderLine, OrderLine, ProductId};
    use resource_actor::mock::MockClient;

    fn new_order() -> NewOrder {
        NewOrder {
            customer: Customer::new("c1", "Ana", "ana@example.com"),
            products: vec![NewOrderLine {
                product_id: ProductId::from("p1"),
                quantity: 3,
                price: 5.0,
            }],
        }
    }

    #[tokio::test]
    async fn test_create_reads_back_persisted_order() {
        let persisted = Order {
            id: OrderId::from(1),
            customer: Customer::new("c1", "Ana", "ana@example.com"),
            order_products: vec![OrderLine {
                line_no: 1,
                product_id: ProductId::from("p1"),
                quantity: 3,
                price: 5.0,
            }],
        };

        let mut mock = MockClient::<Order>::new();
        mock.expect_create().return_ok(OrderId::from(1));
        mock.expect_get(OrderId::from(1))
            .return_ok(Some(persisted.clone()));

        let client = OrderClient::new(mock.client());
        let order = OrderStore::create(&client, new_order()).await.unwrap();
        assert_eq!(order, persisted);
        mock.verify();
    }

    #[tokio::test]
    async fn test_entity_validation_error_is_preserved() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create()
            .return_err(FrameworkError::entity(OrderError::ValidationError(
                "an order needs at least one line".to_string(),
            )));

        let client = OrderClient::new(mock.client());
        let result = OrderStore::create(&client, new_order()).await;
        assert!(matches!(result, Err(OrderError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_delete_of_unknown_order_is_not_found() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_delete(OrderId::from(9))
            .return_err(FrameworkError::NotFound("order_9".to_string()));

        let client = OrderClient::new(mock.client());
        let result = OrderStore::delete(&client, &OrderId::from(9)).await;
        assert_eq!(result, Err(OrderError::NotFound("order_9".to_string())));
    }
}
