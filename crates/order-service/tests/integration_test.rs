use order_service::lifecycle::{OrderSystem, SystemConfig};
use order_service::model::{CustomerCreate, CustomerId, ProductCreate, ProductId};
use order_service::services::{CreateOrderError, CreateOrderRequest, OrderLineRequest};
use resource_actor::tracing::setup_test_tracing;
use resource_actor::ActorClient;

async fn seed_customer(system: &OrderSystem) -> CustomerId {
    system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await
        .expect("Failed to create customer")
}

async fn seed_product(system: &OrderSystem, name: &str, price: f64, quantity: u32) -> ProductId {
    system
        .product_client
        .create_product(ProductCreate {
            name: name.to_string(),
            price,
            quantity,
        })
        .await
        .expect("Failed to create product")
}

/// Full end-to-end run through the real actors.
#[tokio::test]
async fn test_order_through_real_actors_decrements_stock() {
    setup_test_tracing();
    let system = OrderSystem::new();
    let service = system.create_order_service();

    let customer_id = seed_customer(&system).await;
    let widget = seed_product(&system, "Super Widget", 25.5, 100).await;
    let gadget = seed_product(&system, "Gadget", 10.0, 3).await;

    let order = service
        .execute(CreateOrderRequest {
            customer_id: customer_id.clone(),
            products: vec![
                OrderLineRequest::new(widget.clone(), 5),
                OrderLineRequest::new(gadget.clone(), 3),
            ],
        })
        .await
        .expect("Failed to create order");

    assert_eq!(order.customer_id(), &customer_id);
    assert_eq!(order.order_products.len(), 2);
    assert_eq!(order.order_products[0].line_no, 1);
    assert_eq!(order.order_products[0].product_id, widget);
    assert_eq!(order.order_products[0].price, 25.5);
    assert_eq!(order.order_products[1].line_no, 2);
    assert_eq!(order.total(), 157.5);

    // The order is readable from its actor.
    let stored = system
        .order_client
        .get(order.id.clone())
        .await
        .expect("Failed to get order")
        .expect("Order not found");
    assert_eq!(stored, order);

    assert_eq!(system.product_client.check_stock(widget).await.unwrap(), 95);
    assert_eq!(system.product_client.check_stock(gadget).await.unwrap(), 0);

    drop(service);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_oversized_order_leaves_stock_unchanged() {
    let system = OrderSystem::new();
    let service = system.create_order_service();

    let customer_id = seed_customer(&system).await;
    let widget = seed_product(&system, "Widget", 5.0, 10).await;
    let gadget = seed_product(&system, "Gadget", 1.0, 2).await;

    let result = service
        .execute(CreateOrderRequest {
            customer_id,
            products: vec![
                OrderLineRequest::new(widget.clone(), 4),
                OrderLineRequest::new(gadget.clone(), 3),
            ],
        })
        .await;

    assert_eq!(
        result,
        Err(CreateOrderError::InsufficientStock {
            product_id: gadget.clone(),
            requested: 3,
        })
    );
    assert_eq!(system.product_client.check_stock(widget).await.unwrap(), 10);
    assert_eq!(system.product_client.check_stock(gadget).await.unwrap(), 2);

    drop(service);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_unknown_customer_and_product() {
    let system = OrderSystem::with_config(&SystemConfig { channel_buffer: 4 });
    let service = system.create_order_service();

    let widget = seed_product(&system, "Widget", 5.0, 10).await;

    let result = service
        .execute(CreateOrderRequest {
            customer_id: CustomerId::from("customer_99"),
            products: vec![OrderLineRequest::new(widget.clone(), 1)],
        })
        .await;
    assert_eq!(
        result,
        Err(CreateOrderError::CustomerNotFound(CustomerId::from(
            "customer_99"
        )))
    );

    let customer_id = seed_customer(&system).await;
    let result = service
        .execute(CreateOrderRequest {
            customer_id,
            products: vec![
                OrderLineRequest::new(widget.clone(), 1),
                OrderLineRequest::new("product_42", 1),
            ],
        })
        .await;
    assert_eq!(
        result,
        Err(CreateOrderError::ProductNotFound(ProductId::from(
            "product_42"
        )))
    );
    assert_eq!(system.product_client.check_stock(widget).await.unwrap(), 10);

    drop(service);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_consecutive_orders_see_previous_decrements() {
    let system = OrderSystem::new();
    let service = system.create_order_service();

    let customer_id = seed_customer(&system).await;
    let widget = seed_product(&system, "Widget", 5.0, 10).await;

    let order_for = |quantity| CreateOrderRequest {
        customer_id: customer_id.clone(),
        products: vec![OrderLineRequest::new(widget.clone(), quantity)],
    };

    let first = service.execute(order_for(6)).await.expect("first order");
    let second = service.execute(order_for(5)).await;
    let third = service.execute(order_for(4)).await.expect("third order");

    assert_ne!(first.id, third.id);
    assert_eq!(
        second,
        Err(CreateOrderError::InsufficientStock {
            product_id: widget.clone(),
            requested: 5,
        })
    );
    assert_eq!(system.product_client.check_stock(widget).await.unwrap(), 0);

    drop(service);
    system.shutdown().await.expect("Shutdown failed");
}
