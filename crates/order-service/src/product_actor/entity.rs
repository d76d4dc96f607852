//! [`ActorEntity`] implementation for [`Product`].

use super::actions::{ProductAction, ProductActionResult};
use super::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        validate_price(params.price)?;
        Ok(Self::new(id, params.name, params.price, params.quantity))
    }

    /// Handles updates to the Product entity.
    ///
    /// # Fields Updated
    /// - `price`: unit price
    /// - `quantity`: available stock, replaced (not added to)
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(price) = update.price {
            validate_price(price)?;
            self.price = price;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.quantity)),
        }
    }
}

fn validate_price(price: f64) -> Result<(), ProductError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(ProductError::InvalidPrice(price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rejects_negative_price() {
        let params = ProductCreate {
            name: "Widget".to_string(),
            price: -1.0,
            quantity: 3,
        };
        let result = Product::from_create_params(ProductId::from(1), params);
        assert_eq!(result, Err(ProductError::InvalidPrice(-1.0)));
    }

    #[tokio::test]
    async fn test_update_replaces_quantity() {
        let mut product = Product::new("p1", "Widget", 5.0, 10);
        let update = ProductUpdate {
            price: None,
            quantity: Some(7),
        };
        product.on_update(update, &()).await.unwrap();
        assert_eq!(product.quantity, 7);
        assert_eq!(product.price, 5.0);
    }
}
