//! # ActorEntity Trait
//!
//! The contract every resource (customers, products, orders) implements to be
//! managed by a [`ResourceActor`](crate::ResourceActor). Associated types pin down the id,
//! the create/update payloads, the custom actions, the injected context and the
//! error type, so a `ProductUpdate` can never reach the customer actor.
//!
//! Only `from_create_params`, `on_update` and `handle_action` are required.
//! `on_create` and `on_delete` default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// Hooks are async so an entity can call other actors through its `Context`,
/// which is handed to [`ResourceActor::run`](crate::ResourceActor::run) rather than to
/// the constructor. Use `()` when the entity has no dependencies.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier. Built from the actor's `u32` counter on create.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating a new instance.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `CheckStock`).
    type Action: Send + Sync + Debug;

    /// Result returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected at `run()` time.
    type Context: Send + Sync;

    /// One error enum per actor; every hook reports through it.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the generated id and the payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the entity is stored.
    /// An error here discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
