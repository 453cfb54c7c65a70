//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the actor runtime.
//!
//! ## Key Types
//!
//! - [`ActorState`]: The trait that every actor-owned state must implement.
//! - [`StateActor`]: The generic actor that owns the state and processes requests.
//! - [`StateClient`]: The generic client for communicating with the actor.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, StateError).

use async_trait::async_trait;
use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any state must implement to be owned by a [`StateActor`].
///
/// # Architecture Note
/// The actor owns exactly one value of the implementing type. Every command is
/// handled to completion, including any awaited calls into the injected
/// `Context`, before the next request is taken off the channel. State that lives
/// behind an actor therefore never observes two interleaved commands.
///
/// # Async & Context
/// `handle_command` is async so that it can call external services. The `Context`
/// holds those dependencies and is injected through [`StateActor::run`] rather than
/// at construction time ("Late Binding").
#[async_trait]
pub trait ActorState: Send + 'static {
    /// Read-only view handed out to clients.
    type Snapshot: Clone + Send + Sync + Debug + 'static;

    /// Enum of the mutations this state accepts.
    type Command: Send + Sync + Debug;

    /// The value returned for a successfully handled command.
    type Reply: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this state.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Produces a defensive copy of the current state.
    fn snapshot(&self) -> Self::Snapshot;

    /// Applies a command. On `Err` the implementation must leave its state untouched.
    async fn handle_command(
        &mut self,
        command: Self::Command,
        ctx: &Self::Context,
    ) -> Result<Self::Reply, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("State error: {0}")]
    StateError(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// - **Snapshot**: Read. Returns a copy of the current state.
/// - **Command**: Write. Runs [`ActorState::handle_command`].
#[derive(Debug)]
pub enum Request<T: ActorState> {
    Snapshot {
        respond_to: Response<T::Snapshot>,
    },
    Command {
        command: T::Command,
        respond_to: Response<T::Reply>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns one [`ActorState`].
///
/// This struct is the "Server" half of the actor. It owns the state and the
/// receiver end of the channel and processes requests *sequentially*, so the
/// state needs no `Mutex` or `RwLock`.
pub struct StateActor<T: ActorState> {
    receiver: mpsc::Receiver<Request<T>>,
    state: T,
}

impl<T: ActorState> StateActor<T> {
    /// Creates a new `StateActor` around `state` and its associated `StateClient`.
    ///
    /// # Arguments
    ///
    /// * `state` - The initial state, already restored by the caller.
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(state: T, buffer_size: usize) -> (Self, StateClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        let client = StateClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is passed to every command handler.
    pub async fn run(mut self, context: T::Context) {
        let state_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                Request::Snapshot { respond_to } => {
                    debug!(state_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.snapshot()));
                }
                Request::Command {
                    command,
                    respond_to,
                } => {
                    debug!(state_type, ?command, "Command");
                    let result = self
                        .state
                        .handle_command(command, &context)
                        .await
                        .map_err(|e| FrameworkError::StateError(Box::new(e)));
                    match &result {
                        Ok(_) => info!(state_type, "Command ok"),
                        Err(e) => warn!(state_type, error = %e, "Command failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(state_type, "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `StateActor`.
///
/// Holds only a sender, so cloning is inexpensive and clones can be shared across tasks.
pub struct StateClient<T: ActorState> {
    sender: mpsc::Sender<Request<T>>,
}

impl<T: ActorState> Clone for StateClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorState> StateClient<T> {
    pub fn new(sender: mpsc::Sender<Request<T>>) -> Self {
        Self { sender }
    }

    pub async fn snapshot(&self) -> Result<T::Snapshot, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(Request::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn execute(&self, command: T::Command) -> Result<T::Reply, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(Request::Command {
                command,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
