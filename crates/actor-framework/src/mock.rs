//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of expectations instead of an actor. Use it to test logic *around* a client, or to
//! run a real actor whose dependencies are mocked.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | No real state (expectations) | Real state management |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//! | **Use Case** | Logic around the client, failure paths | The actor itself, full system |
//!
//! ## Testing Strategies
//!
//! 1. **Client logic (pure mock)**: wrap `mock.client()` in a domain client and assert on the
//!    values it returns.
//! 2. **Actor with mocked dependencies**: run a real `ResourceActor` with mocked clients in its
//!    context. This is how the movie actor's check-out is tested against a failing ledger.
//! 3. **Full system**: spawn every actor and drive them through the public clients.
//!
//! ## Simulating Failures
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Member { id: u32 }
//! #[derive(Debug)] struct MemberCreate;
//! #[derive(Debug)] struct MemberUpdate;
//! #[derive(Debug)] enum MemberAction {}
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct MemberError;
//!
//! #[async_trait]
//! impl ActorEntity for Member {
//!     type Id = u32; type Create = MemberCreate; type Update = MemberUpdate;
//!     type Action = MemberAction; type ActionResult = (); type Context = (); type Error = MemberError;
//!     fn from_create_params(id: u32, _: MemberCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: MemberUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: MemberAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Member>::new();
//!     let client = mock.client();
//!
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.get(1).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! A request that does not match the next expectation (wrong kind or wrong id) gets no answer,
//! so the caller sees [`FrameworkError::ActorDropped`], and `verify()` fails afterwards.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A queued expected request and the response to give it.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

struct MockState<T: ActorEntity> {
    expectations: VecDeque<Expectation<T>>,
    unexpected: Vec<String>,
}

type SharedState<T> = Arc<Mutex<MockState<T>>>;

fn lock<T: ActorEntity>(state: &SharedState<T>) -> MutexGuard<'_, MockState<T>> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn describe<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { params, .. } => format!("Create({params:?})"),
        ResourceRequest::Get { id, .. } => format!("Get({id})"),
        ResourceRequest::List { .. } => "List".to_string(),
        ResourceRequest::Update { id, update, .. } => format!("Update({id}, {update:?})"),
        ResourceRequest::Delete { id, .. } => format!("Delete({id})"),
        ResourceRequest::Action { id, action, .. } => format!("Action({id}, {action:?})"),
    }
}

fn answer<R>(respond_to: oneshot::Sender<Result<R, FrameworkError>>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

/// A mock client with expectation tracking for fluent testing.
///
/// ```ignore
/// let mut mock = MockClient::<Customer>::new();
/// mock.expect_get(CustomerId(1)).return_ok(Some(customer));
/// let client = CustomerClient::new(mock.client());
/// // ... exercise code that uses the client ...
/// mock.verify();
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    state: SharedState<T>,
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
        let state: SharedState<T> = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            unexpected: Vec::new(),
        }));
        let task_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut guard = lock(&task_state);
                let expectation = guard.expectations.pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response }))
                        if id == want =>
                    {
                        answer(respond_to, response)
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        answer(respond_to, response)
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        answer(respond_to, response)
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: want, response }),
                    ) if id == want => answer(respond_to, response),
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: want, response }),
                    ) if id == want => answer(respond_to, response),
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: want, response }),
                    ) if id == want => answer(respond_to, response),
                    (request, expectation) => {
                        let wanted = if expectation.is_some() { "a different request" } else { "nothing" };
                        let seen = describe(&request);
                        guard.unexpected.push(format!("{seen} while expecting {wanted}"));
                        // Dropping `request` drops its responder: the caller sees ActorDropped.
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            state: self.state.clone(),
            make: Box::new(make),
        }
    }

    /// Expects a `get` for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `create`; the payload is not inspected.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects a `list` (one per shard; mock clients have a single shard).
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    /// Expects an `update` for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Expects an action on `id`; the action itself is not inspected.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    /// Panics if any expectation is still queued or any request arrived unexpectedly.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.unexpected.is_empty() {
            panic!("Unexpected requests: {:?}", state.unexpected);
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

/// Completes an expectation with the response to give.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    state: SharedState<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        lock(&self.state).expectations.push_back(expectation);
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls requests with [`expect_create`], [`expect_get`] or
/// [`expect_action`], inspects them, and answers through the returned responder. Dropping the
/// receiver simulates an actor that has shut down.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
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
    struct Member {
        id: u32,
        name: String,
    }

    #[derive(Debug)]
    struct MemberCreate {
        name: String,
    }

    #[derive(Debug)]
    struct MemberUpdate;

    #[derive(Debug)]
    enum MemberAction {}

    #[derive(Debug, thiserror::Error)]
    #[error("Member error")]
    struct MemberError;

    #[async_trait]
    impl ActorEntity for Member {
        type Id = u32;
        type Create = MemberCreate;
        type Update = MemberUpdate;
        type Action = MemberAction;
        type ActionResult = ();
        type Context = ();
        type Error = MemberError;

        fn from_create_params(id: u32, params: MemberCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                name: params.name,
            })
        }

        async fn on_update(&mut self, _update: MemberUpdate, _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, action: MemberAction, _ctx: &()) -> Result<(), Self::Error> {
            match action {}
        }
    }

    fn member(id: u32, name: &str) -> Member {
        Member {
            id,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Member>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(MemberCreate {
                    name: "Test".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "Test");
        responder.send(Ok(member(1, "Test"))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result.unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Member>::new();
        mock.expect_create().return_ok(member(1, "Ann"));
        mock.expect_get(1).return_ok(Some(member(1, "Ann")));
        mock.expect_list().return_ok(vec![member(1, "Ann")]);

        let client = mock.client();
        let created = client
            .create(MemberCreate {
                name: "Ann".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().name, "Ann");
        assert_eq!(client.list().await.unwrap().len(), 1);

        mock.verify();
    }

    #[tokio::test]
    async fn mismatched_id_is_dropped_and_recorded() {
        let mut mock = MockClient::<Member>::new();
        mock.expect_get(1).return_ok(None);

        let result = mock.client().get(2).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));

        let verdict = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verdict.is_err());
    }
}
