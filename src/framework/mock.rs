//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_command`] or [`expect_snapshot`] to assert behavior.

use crate::framework::{ActorState, FrameworkError, Request, StateClient};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<T: ActorState> {
    Snapshot {
        response: Result<T::Snapshot, FrameworkError>,
    },
    Command {
        response: Result<T::Reply, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<CartState>::new();
/// mock.expect_snapshot().return_ok(Cart::default());
/// mock.expect_command().return_ok(Cart::default());
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorState> {
    client: StateClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorState> MockClient<T>
where
    T::Snapshot: Send,
    T::Command: Send,
    T::Reply: Send,
{
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<Request<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("expectation queue poisoned")
                    .pop_front();

                match (request, expectation) {
                    (Request::Snapshot { respond_to }, Some(Expectation::Snapshot { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (Request::Command { respond_to, .. }, Some(Expectation::Command { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StateClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StateClient<T> {
        self.client.clone()
    }

    /// Expects a `snapshot` request.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<T> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `command` request.
    pub fn expect_command(&mut self) -> CommandExpectationBuilder<T> {
        CommandExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("expectation queue poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<T: ActorState> Default for MockClient<T>
where
    T::Snapshot: Send,
    T::Command: Send,
    T::Reply: Send,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<T: ActorState> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorState> SnapshotExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T::Snapshot) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::Snapshot, FrameworkError>) {
        self.expectations
            .lock()
            .expect("expectation queue poisoned")
            .push_back(Expectation::Snapshot { response });
    }
}

/// Builder for `command` expectations.
pub struct CommandExpectationBuilder<T: ActorState> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorState> CommandExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, reply: T::Reply) {
        self.push(Ok(reply));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::Reply, FrameworkError>) {
        self.expectations
            .lock()
            .expect("expectation queue poisoned")
            .push_back(Expectation::Command { response });
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// Instead of spinning up a full [`StateActor`](crate::framework::StateActor), the
/// client sends messages to a channel the test controls. The test inspects each
/// message and answers through its `respond_to` sender, which lets it simulate
/// success, failure, or delays deterministically.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: ActorState>(
    buffer_size: usize,
) -> (StateClient<T>, mpsc::Receiver<Request<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StateClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<T: ActorState>(
    receiver: &mut mpsc::Receiver<Request<T>>,
) -> Option<tokio::sync::oneshot::Sender<Result<T::Snapshot, FrameworkError>>> {
    match receiver.recv().await {
        Some(Request::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Command request
pub async fn expect_command<T: ActorState>(
    receiver: &mut mpsc::Receiver<Request<T>>,
) -> Option<(
    T::Command,
    tokio::sync::oneshot::Sender<Result<T::Reply, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(Request::Command {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}
