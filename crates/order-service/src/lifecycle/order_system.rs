use super::SystemConfig;
use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::services::CreateOrderService;
use std::sync::Arc;
use tracing::{error, info};

/// Starts, wires and stops the customer, product and order actors.
///
/// The order workflow is not an actor: [`create_order_service`](Self::create_order_service)
/// builds a [`CreateOrderService`] over clones of the three clients.
///
/// # Example
///
/// ```rust
/// use order_service::lifecycle::OrderSystem;
///
/// #[tokio::main]
/// async fn main() -> Result<(), String> {
///     let system = OrderSystem::new();
///     let service = system.create_order_service();
///     // ... execute orders ...
///     drop(service);
///     system.shutdown().await
/// }
/// ```
pub struct OrderSystem {
    pub customer_client: CustomerClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts the system with [`SystemConfig::default`].
    pub fn new() -> Self {
        Self::with_config(&SystemConfig::default())
    }

    /// Spawns one task per actor. Must be called inside a Tokio runtime.
    pub fn with_config(config: &SystemConfig) -> Self {
        info!(channel_buffer = config.channel_buffer, "Starting order system");

        let (customer_actor, customer_client) = crate::customer_actor::new(config.channel_buffer);
        let (product_actor, product_client) = crate::product_actor::new(config.channel_buffer);
        let (order_actor, order_client) = crate::order_actor::new(config.channel_buffer);

        // None of the actors depend on each other (Context = ()).
        let customer_handle = tokio::spawn(customer_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(()));

        Self {
            customer_client: CustomerClient::new(customer_client),
            product_client: ProductClient::new(product_client),
            order_client: OrderClient::new(order_client),
            handles: vec![customer_handle, product_handle, order_handle],
        }
    }

    /// Wires the order workflow to this system's actors.
    pub fn create_order_service(&self) -> CreateOrderService {
        CreateOrderService::new(
            Arc::new(self.order_client.clone()),
            Arc::new(self.product_client.clone()),
            Arc::new(self.customer_client.clone()),
            Arc::new(self.product_client.clone()),
        )
    }

    /// Drops the clients and waits for every actor task to finish.
    ///
    /// Actors only stop once *all* clones of their client are gone, so any
    /// [`CreateOrderService`] built from this system must be dropped first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.customer_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
