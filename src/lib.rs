//! # Cart Engine
//!
//! > **A stock-checked shopping cart that never loses a write.**
//!
//! This crate keeps a user's cart in memory, mirrors it to durable storage, and
//! refuses any change that inventory cannot cover. The cart is owned by one actor
//! task, so every operation sees the result of the one before it.
//!
//! ## 🚀 Core Concepts
//!
//! ### Validate, then commit
//! An operation computes the complete next cart, checks stock where the amount
//! grows, writes the result to storage and only then makes it live. Any failure on
//! the way leaves both the stored and the live cart untouched.
//!
//! ### Four notices
//! Failures surface to the user through a [`NotificationSink`](notify::NotificationSink)
//! as one of four [`Notice`](notify::Notice)s: add failed, remove failed, update
//! failed, out of stock. Programmatic callers get the structured
//! [`CartError`](cart_actor::CartError) as well.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`StateActor`](framework::StateActor) that owns one piece of state
//! and applies commands to it in order.
//!
//! ### 2. The Cart ([`cart_actor`], [`repository`], [`stock`])
//! [`CartState`](cart_actor::CartState) implements add/remove/update on top of the
//! [`CartRepository`](repository::CartRepository), gated by the
//! [`StockValidator`](stock::StockValidator).
//!
//! ### 3. The Boundaries ([`inventory`], [`storage`], [`notify`])
//! Traits for the product/stock service, the key-value store and the notification
//! channel, each with an in-process implementation and a real one.
//!
//! ### 4. The Interface ([`clients`])
//! [`CartClient`](clients::CartClient) is what the rest of an application holds.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! [`CartSystem`](lifecycle::CartSystem) restores the cart, spawns the actor and
//! shuts it down.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod inventory;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod repository;
pub mod stock;
pub mod storage;
