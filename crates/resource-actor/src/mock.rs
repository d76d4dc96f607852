//! # Mock Clients
//!
//! Two ways to stand in for a real actor when testing code that sits on top of a
//! [`ResourceClient`]:
//!
//! | | [`MockClient`] | [`create_mock_client`] + `expect_*` helpers |
//! |---|---|---|
//! | **Style** | Queue canned replies up front | Drive the receiver by hand |
//! | **Sees payloads** | No | Yes (ids, params, updates) |
//! | **Best for** | Happy paths, error injection | Asserting exactly what was sent |
//!
//! ## Queued replies
//!
//! ```rust
//! use resource_actor::mock::MockClient;
//! use resource_actor::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Customer { id: u32 }
//! #[derive(Debug)] struct CustomerCreate;
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct CustomerError;
//!
//! #[async_trait]
//! impl ActorEntity for Customer {
//!     type Id = u32; type Create = CustomerCreate; type Update = ();
//!     type Action = (); type ActionResult = (); type Context = (); type Error = CustomerError;
//!     fn from_create_params(id: u32, _: CustomerCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Customer>::new();
//!     mock.expect_get(1).return_ok(Some(Customer { id: 1 }));
//!     mock.expect_get(2).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(client.get(1).await.unwrap().is_some());
//!     assert!(matches!(client.get(2).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! A request that does not match the next queued expectation (or arrives when
//! none is queued) stops the mock: the caller sees `ActorDropped`/`ActorClosed`
//! and [`MockClient::verify`] panics. A test that queues nothing therefore
//! asserts that the client is never called.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// A queued reply for the next request of the matching kind.
enum Expectation<T: ActorEntity> {
    Get(Result<Option<T>, FrameworkError>),
    GetMany(Result<Vec<T>, FrameworkError>),
    Create(Result<T::Id, FrameworkError>),
    UpdateMany(Result<Vec<T>, FrameworkError>),
    Delete(Result<(), FrameworkError>),
    Action(Result<T::ActionResult, FrameworkError>),
}

impl<T: ActorEntity> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::Get(_) => "Get",
            Expectation::GetMany(_) => "GetMany",
            Expectation::Create(_) => "Create",
            Expectation::UpdateMany(_) => "UpdateMany",
            Expectation::Delete(_) => "Delete",
            Expectation::Action(_) => "Action",
        }
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client answering from a queue of expectations.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    unexpected: Arc<AtomicBool>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let unexpected = Arc::new(AtomicBool::new(false));

        let queue = expectations.clone();
        let flag = unexpected.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();
                if let Err(kind) = Self::answer(request, expectation, &flag) {
                    tracing::error!(
                        entity = std::any::type_name::<T>(),
                        kind,
                        "Unexpected request"
                    );
                    return;
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            unexpected,
            _handle: handle,
        }
    }

    fn answer(
        request: ResourceRequest<T>,
        expectation: Option<Expectation<T>>,
        unexpected: &AtomicBool,
    ) -> Result<(), &'static str> {
        match (request, expectation) {
            (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get(response))) => {
                let _ = respond_to.send(response);
            }
            (ResourceRequest::GetMany { respond_to, .. }, Some(Expectation::GetMany(response))) => {
                let _ = respond_to.send(response);
            }
            (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(response))) => {
                let _ = respond_to.send(response);
            }
            (
                ResourceRequest::UpdateMany { respond_to, .. },
                Some(Expectation::UpdateMany(response)),
            ) => {
                let _ = respond_to.send(response);
            }
            (ResourceRequest::Delete { respond_to, .. }, Some(Expectation::Delete(response))) => {
                let _ = respond_to.send(response);
            }
            (ResourceRequest::Action { respond_to, .. }, Some(Expectation::Action(response))) => {
                let _ = respond_to.send(response);
            }
            (request, other) => {
                // Flag before the responder drops so the caller never observes a clean mock.
                unexpected.store(true, Ordering::SeqCst);
                let queued = other.as_ref().map_or("none queued", Expectation::kind);
                drop(request);
                return Err(queued);
            }
        }
        Ok(())
    }

    fn push(&self, expectation: Expectation<T>) {
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` request. The id is documentation only; replies are served in queue order.
    pub fn expect_get(&mut self, _id: T::Id) -> Reply<'_, T, Option<T>> {
        Reply::new(self, Expectation::Get)
    }

    /// Expects a `get_many` request.
    pub fn expect_get_many(&mut self) -> Reply<'_, T, Vec<T>> {
        Reply::new(self, Expectation::GetMany)
    }

    /// Expects a `create` request.
    pub fn expect_create(&mut self) -> Reply<'_, T, T::Id> {
        Reply::new(self, Expectation::Create)
    }

    /// Expects an `update_many` request.
    pub fn expect_update_many(&mut self) -> Reply<'_, T, Vec<T>> {
        Reply::new(self, Expectation::UpdateMany)
    }

    /// Expects a `delete` request.
    pub fn expect_delete(&mut self, _id: T::Id) -> Reply<'_, T, ()> {
        Reply::new(self, Expectation::Delete)
    }

    /// Expects an `action` request.
    pub fn expect_action(&mut self, _id: T::Id) -> Reply<'_, T, T::ActionResult> {
        Reply::new(self, Expectation::Action)
    }

    /// Panics if an expectation was left unused or an unexpected request arrived.
    pub fn verify(&self) {
        if self.unexpected.load(Ordering::SeqCst) {
            panic!("Mock received an unexpected request");
        }
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder finishing an expectation with either a value or an error.
pub struct Reply<'a, T: ActorEntity, R> {
    mock: &'a MockClient<T>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<'a, T: ActorEntity, R> Reply<'a, T, R> {
    fn new(mock: &'a MockClient<T>, wrap: fn(Result<R, FrameworkError>) -> Expectation<T>) -> Self {
        Self { mock, wrap }
    }

    /// Answer the request successfully with `value`.
    pub fn return_ok(self, value: R) {
        self.mock.push((self.wrap)(Ok(value)));
    }

    /// Answer the request with `error`.
    pub fn return_err(self, error: FrameworkError) {
        self.mock.push((self.wrap)(Err(error)));
    }
}

// =============================================================================
// RECEIVER-DRIVEN HELPERS
// =============================================================================

/// Creates a client and the receiver that stands in for the actor.
///
/// The test spawns the code under test, then pulls each request off the
/// receiver with the `expect_*` helpers, inspects its payload and answers
/// through the returned responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a GetMany request.
pub async fn expect_get_many<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Vec<T::Id>, oneshot::Sender<Result<Vec<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::GetMany { ids, respond_to }) => Some((ids, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an UpdateMany request.
#[allow(clippy::type_complexity)]
pub async fn expect_update_many<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    Vec<(T::Id, T::Update)>,
    oneshot::Sender<Result<Vec<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::UpdateMany {
            updates,
            respond_to,
        }) => Some((updates, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Delete request.
pub async fn expect_delete<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Action request.
#[allow(clippy::type_complexity)]
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: u32,
        stock: u32,
    }

    #[derive(Debug)]
    struct ItemCreate {
        stock: u32,
    }

    #[derive(Debug)]
    struct SetStock(u32);

    #[derive(Debug, thiserror::Error)]
    #[error("Item error")]
    struct ItemError;

    #[async_trait]
    impl ActorEntity for Item {
        type Id = u32;
        type Create = ItemCreate;
        type Update = SetStock;
        type Action = ();
        type ActionResult = ();
        type Context = ();
        type Error = ItemError;

        fn from_create_params(id: u32, params: ItemCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                stock: params.stock,
            })
        }

        async fn on_update(&mut self, update: SetStock, _ctx: &()) -> Result<(), Self::Error> {
            self.stock = update.0;
            Ok(())
        }

        async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_receiver_driven_update_many() {
        let (client, mut receiver) = create_mock_client::<Item>(10);

        let task =
            tokio::spawn(async move {
                client
                    .update_many(vec![(1, SetStock(4)), (2, SetStock(0))])
                    .await
            });

        let (updates, responder) = expect_update_many(&mut receiver)
            .await
            .expect("Expected UpdateMany request");
        let sent: Vec<(u32, u32)> = updates.iter().map(|(id, s)| (*id, s.0)).collect();
        assert_eq!(sent, vec![(1, 4), (2, 0)]);
        responder
            .send(Ok(vec![Item { id: 1, stock: 4 }, Item { id: 2, stock: 0 }]))
            .unwrap();

        let updated = task.await.unwrap().unwrap();
        assert_eq!(updated.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_client_serves_queue_in_order() {
        let mut mock = MockClient::<Item>::new();
        mock.expect_create().return_ok(1);
        mock.expect_get_many()
            .return_ok(vec![Item { id: 1, stock: 3 }]);
        mock.expect_delete(1).return_ok(());

        let client = mock.client();
        assert_eq!(client.create(ItemCreate { stock: 3 }).await.unwrap(), 1);
        let items = client.get_many(vec![1, 9]).await.unwrap();
        assert_eq!(items, vec![Item { id: 1, stock: 3 }]);
        client.delete(1).await.unwrap();

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_rejects_unexpected_request() {
        let mut mock = MockClient::<Item>::new();
        mock.expect_get(1).return_ok(None);

        let client = mock.client();
        let result = client.delete(1).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));

        let verified = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verified.is_err());
    }
}
