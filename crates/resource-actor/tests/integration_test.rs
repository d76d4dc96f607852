use async_trait::async_trait;
use resource_actor::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Item {
    id: u32,
    name: String,
    stock: u32,
}

#[derive(Debug)]
struct ItemCreate {
    name: String,
    stock: u32,
}

#[derive(Debug)]
struct ItemUpdate {
    stock: Option<u32>,
}

#[derive(Debug)]
enum ItemAction {
    Take(u32),
}

#[derive(Debug, thiserror::Error)]
enum ItemError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("stock cannot exceed 1000")]
    TooMuchStock,
    #[error("only {available} left")]
    Insufficient { available: u32 },
}

#[async_trait]
impl ActorEntity for Item {
    type Id = u32;
    type Create = ItemCreate;
    type Update = ItemUpdate;
    type Action = ItemAction;
    type ActionResult = u32;
    type Context = ();
    type Error = ItemError;

    fn from_create_params(id: u32, params: ItemCreate) -> Result<Self, Self::Error> {
        if params.name.is_empty() {
            return Err(ItemError::EmptyName);
        }
        Ok(Self {
            id,
            name: params.name,
            stock: params.stock,
        })
    }

    async fn on_update(&mut self, update: ItemUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(stock) = update.stock {
            if stock > 1000 {
                return Err(ItemError::TooMuchStock);
            }
            self.stock = stock;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: ItemAction, _ctx: &()) -> Result<u32, Self::Error> {
        match action {
            ItemAction::Take(n) if n <= self.stock => {
                self.stock -= n;
                Ok(self.stock)
            }
            ItemAction::Take(_) => Err(ItemError::Insufficient {
                available: self.stock,
            }),
        }
    }
}

fn item(name: &str, stock: u32) -> ItemCreate {
    ItemCreate {
        name: name.into(),
        stock,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    let id: u32 = client.create(item("bolt", 10)).await.unwrap();
    assert_eq!(id, 1);

    let left = client.perform_action(id, ItemAction::Take(4)).await.unwrap();
    assert_eq!(left, 6);

    let err = client.perform_action(id, ItemAction::Take(7)).await;
    assert!(matches!(err, Err(FrameworkError::EntityError(_))));

    let updated: Item = client
        .update(id, ItemUpdate { stock: Some(50) })
        .await
        .unwrap();
    assert_eq!(updated.stock, 50);

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
    assert!(matches!(
        client.delete(id).await,
        Err(FrameworkError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_rejected_create_is_not_stored() {
    let (actor, client) = ResourceActor::<Item>::new(10);
    tokio::spawn(actor.run(()));

    assert!(client.create(item("", 1)).await.is_err());
    let id = client.create(item("nut", 1)).await.unwrap();

    // The failed create still consumed id 1.
    assert_eq!(id, 2);
    assert!(client.get(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_many_keeps_request_order_and_skips_unknown() {
    let (actor, client) = ResourceActor::<Item>::new(10);
    tokio::spawn(actor.run(()));

    let a = client.create(item("a", 1)).await.unwrap();
    let b = client.create(item("b", 2)).await.unwrap();
    let c = client.create(item("c", 3)).await.unwrap();

    let found = client.get_many(vec![c, 99, a, b]).await.unwrap();
    let names: Vec<&str> = found.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["c", "a", "b"]);

    assert!(client.get_many(vec![7, 8]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_many_applies_every_update() {
    let (actor, client) = ResourceActor::<Item>::new(10);
    tokio::spawn(actor.run(()));

    let a = client.create(item("a", 10)).await.unwrap();
    let b = client.create(item("b", 20)).await.unwrap();

    let updated = client
        .update_many(vec![
            (a, ItemUpdate { stock: Some(7) }),
            (b, ItemUpdate { stock: Some(0) }),
        ])
        .await
        .unwrap();
    assert_eq!(updated.len(), 2);

    assert_eq!(client.get(a).await.unwrap().unwrap().stock, 7);
    assert_eq!(client.get(b).await.unwrap().unwrap().stock, 0);
}

#[tokio::test]
async fn test_update_many_with_unknown_id_changes_nothing() {
    let (actor, client) = ResourceActor::<Item>::new(10);
    tokio::spawn(actor.run(()));

    let a = client.create(item("a", 10)).await.unwrap();

    let result = client
        .update_many(vec![
            (a, ItemUpdate { stock: Some(1) }),
            (42, ItemUpdate { stock: Some(1) }),
        ])
        .await;
    assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "42"));
    assert_eq!(client.get(a).await.unwrap().unwrap().stock, 10);
}

#[tokio::test]
async fn test_update_many_with_failing_hook_changes_nothing() {
    let (actor, client) = ResourceActor::<Item>::new(10);
    tokio::spawn(actor.run(()));

    let a = client.create(item("a", 10)).await.unwrap();
    let b = client.create(item("b", 20)).await.unwrap();

    let result = client
        .update_many(vec![
            (a, ItemUpdate { stock: Some(5) }),
            (b, ItemUpdate { stock: Some(5000) }),
        ])
        .await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));
    assert_eq!(client.get(a).await.unwrap().unwrap().stock, 10);
    assert_eq!(client.get(b).await.unwrap().unwrap().stock, 20);
}

#[tokio::test]
async fn test_actor_stops_when_clients_dropped() {
    let (actor, client) = ResourceActor::<Item>::new(10);
    let handle = tokio::spawn(actor.run(()));

    client.create(item("a", 1)).await.unwrap();
    drop(client);

    handle.await.unwrap();
}
