//! Generic single-state actor framework.
//!
//! This module provides the building blocks for owning a piece of mutable state
//! inside one Tokio task and driving it through typed commands.
//!
//! # Main Components
//!
//! - [`ActorState`] - Trait that a state type implements to be owned by an actor
//! - [`StateActor`] - Generic actor that owns the state and processes requests in order
//! - [`StateClient`] - Cloneable handle that sends requests to the actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
