//! Demo binary: starts the actors, seeds a customer and two products, and
//! places one order that succeeds and one that runs out of stock.

use order_service::lifecycle::{OrderSystem, SystemConfig};
use order_service::model::{CustomerCreate, ProductCreate};
use order_service::services::{CreateOrderRequest, OrderLineRequest};
use resource_actor::tracing::setup_tracing;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting order service demo");

    let system = OrderSystem::with_config(&config);

    let customer_id = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .instrument(tracing::info_span!("customer_creation"))
        .await
        .map_err(|e| e.to_string())?;
    info!(customer_id = %customer_id, "Customer created successfully");

    let span = tracing::info_span!("catalog_seeding");
    let (keyboard_id, mouse_id) = async {
        let keyboard = system
            .product_client
            .create_product(ProductCreate {
                name: "Keyboard".to_string(),
                price: 45.0,
                quantity: 10,
            })
            .await?;
        let mouse = system
            .product_client
            .create_product(ProductCreate {
                name: "Mouse".to_string(),
                price: 19.9,
                quantity: 2,
            })
            .await?;
        Ok::<_, order_service::product_actor::ProductError>((keyboard, mouse))
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;
    info!(keyboard_id = %keyboard_id, mouse_id = %mouse_id, "Products created successfully");

    let service = system.create_order_service();

    let requests = [
        CreateOrderRequest {
            customer_id: customer_id.clone(),
            products: vec![
                OrderLineRequest::new(keyboard_id.clone(), 3),
                OrderLineRequest::new(mouse_id.clone(), 1),
            ],
        },
        CreateOrderRequest {
            customer_id: customer_id.clone(),
            products: vec![OrderLineRequest::new(mouse_id.clone(), 5)],
        },
    ];

    for request in requests {
        let span = tracing::info_span!("order_processing");
        match service.execute(request).instrument(span).await {
            Ok(order) => {
                info!(order_id = %order.id, total = order.total(), "Order processed successfully")
            }
            Err(e) => error!(error = %e, "Order processing failed"),
        }
    }

    for id in [keyboard_id, mouse_id] {
        let stock = system
            .product_client
            .check_stock(id.clone())
            .await
            .map_err(|e| e.to_string())?;
        info!(product_id = %id, stock, "Remaining stock");
    }

    drop(service);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
