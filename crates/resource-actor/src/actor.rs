//! # Resource Actor
//!
//! The server half of the runtime. A `ResourceActor<T>` owns the in-memory store
//! for one entity type and processes [`ResourceRequest`]s one at a time, so the
//! store needs no lock.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2. **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3. **Run**: spawn the run loop on a Tokio task.
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Counter { id: u32, value: u32 }
/// #[derive(Debug)] struct CounterCreate;
/// #[derive(Debug)] struct CounterUpdate(u32);
/// #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
///
/// #[async_trait]
/// impl ActorEntity for Counter {
///     type Id = u32;
///     type Create = CounterCreate;
///     type Update = CounterUpdate;
///     type Action = ();
///     type ActionResult = ();
///     type Context = ();
///     type Error = CounterError;
///
///     fn from_create_params(id: u32, _: CounterCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, value: 0 })
///     }
///     async fn on_update(&mut self, update: CounterUpdate, _: &()) -> Result<(), Self::Error> {
///         self.value = update.0;
///         Ok(())
///     }
///     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Counter>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(CounterCreate).await.unwrap();
///     let counter = client.update(id, CounterUpdate(7)).await.unwrap();
///     assert_eq!(counter.value, 7);
/// }
/// ```
///
/// # Batched operations
///
/// * **GetMany** answers with the entities that exist, in the order the ids were
///   requested. Unknown ids are skipped, not reported.
/// * **UpdateMany** first checks that every id exists, then runs `on_update` on
///   staged clones. The store is only written when every hook succeeded, so a
///   failed batch leaves all entities untouched.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. Callers wait for
    /// space when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `context` is passed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(entity_type, params, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::GetMany { ids, respond_to } => {
                    let items: Vec<T> = ids
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(entity_type, requested = ids.len(), found = items.len(), "GetMany");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    self.update(entity_type, id, update, &context, respond_to)
                        .await;
                }
                ResourceRequest::UpdateMany {
                    updates,
                    respond_to,
                } => {
                    debug!(entity_type, ?updates, "UpdateMany");
                    let result = self.update_many(entity_type, updates, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(entity_type, id, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = item
                        .handle_action(action, &context)
                        .await
                        .map_err(FrameworkError::entity);
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        entity_type: &str,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::entity(e)
        })?;
        item.on_create(context).await.map_err(|e| {
            warn!(entity_type, error = %e, "on_create failed");
            FrameworkError::entity(e)
        })?;

        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }

    async fn update(
        &mut self,
        entity_type: &str,
        id: T::Id,
        update: T::Update,
        context: &T::Context,
        respond_to: Response<T>,
    ) {
        let Some(item) = self.store.get_mut(&id) else {
            warn!(entity_type, %id, "Not found");
            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
            return;
        };
        if let Err(e) = item.on_update(update, context).await {
            warn!(entity_type, %id, error = %e, "Update failed");
            let _ = respond_to.send(Err(FrameworkError::entity(e)));
            return;
        }
        info!(entity_type, %id, "Updated");
        let _ = respond_to.send(Ok(item.clone()));
    }

    async fn update_many(
        &mut self,
        entity_type: &str,
        updates: Vec<(T::Id, T::Update)>,
        context: &T::Context,
    ) -> Result<Vec<T>, FrameworkError> {
        if let Some((missing, _)) = updates.iter().find(|(id, _)| !self.store.contains_key(id)) {
            warn!(entity_type, id = %missing, "Not found, batch rejected");
            return Err(FrameworkError::NotFound(missing.to_string()));
        }

        let mut staged: HashMap<T::Id, T> = HashMap::with_capacity(updates.len());
        let mut results = Vec::with_capacity(updates.len());
        for (id, update) in updates {
            let mut item = match staged.remove(&id) {
                Some(item) => item,
                None => match self.store.get(&id) {
                    Some(item) => item.clone(),
                    None => return Err(FrameworkError::NotFound(id.to_string())),
                },
            };
            if let Err(e) = item.on_update(update, context).await {
                warn!(entity_type, %id, error = %e, "Update failed, batch rejected");
                return Err(FrameworkError::entity(e));
            }
            results.push(item.clone());
            staged.insert(id, item);
        }

        let count = staged.len();
        self.store.extend(staged);
        info!(entity_type, count, "Updated batch");
        Ok(results)
    }

    async fn delete(
        &mut self,
        entity_type: &str,
        id: T::Id,
        context: &T::Context,
    ) -> Result<(), FrameworkError> {
        let Some(item) = self.store.get(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        item.on_delete(context).await.map_err(|e| {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            FrameworkError::entity(e)
        })?;
        self.store.remove(&id);
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        Ok(())
    }
}
