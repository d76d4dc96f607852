//! # Product Client
//!
//! High-level API for the `Product` actor: catalog writes, stock checks, and the
//! batched reads/writes used by order creation.
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate, QuantityAdjustment};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use crate::repositories::{InventoryAdjuster, ProductLookup};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Returns the quantity currently available.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::CheckStock(level) => Ok(level),
        }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl ProductLookup for ProductClient {
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, ProductError> {
        self.get_many(ids.to_vec()).await
    }
}

#[async_trait]
impl InventoryAdjuster for ProductClient {
    #[instrument(skip(self, adjustments), fields(count = adjustments.len()))]
    async fn update_quantity(
        &self,
        adjustments: &[QuantityAdjustment],
    ) -> Result<(), ProductError> {
        debug!(?adjustments, "Sending request");
        let updates = adjustments
            .iter()
            .map(|adjustment| {
                let update = ProductUpdate {
                    price: None,
                    quantity: Some(adjustment.quantity),
                };
                (adjustment.product_id.clone(), update)
            })
            .collect();
        self.inner
            .update_many(updates)
            .await
            .map_err(Self::map_error)?;
        info!("Inventory updated");
        Ok(())
    }
}
