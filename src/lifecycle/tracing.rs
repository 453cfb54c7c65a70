//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter driven by
//! `RUST_LOG`, falling back to `info` when it is unset or unparsable.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown, cart restore
//! - **Commands**: every command at `debug`, its outcome at `info`/`warn`
//! - **Commits**: item and unit counts after each persisted change
//! - **Failures**: the structured [`CartError`](crate::cart_actor::CartError) behind
//!   each user-facing notice, with the operation it belongs to
//!
//! ## Usage Examples
//!
//! ```bash
//! # Outcomes only (same as leaving RUST_LOG unset)
//! RUST_LOG=info cargo run
//!
//! # Commands with payloads, stock answers, storage writes
//! RUST_LOG=debug cargo run
//!
//! # Only the engine
//! RUST_LOG=cart_engine::cart_actor=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! INFO Cart restored key="@cart-engine:cart" items=0
//! INFO Actor started state_type="CartState"
//! DEBUG add_product{product_id=ProductId(1)}: Sending request
//! DEBUG Command state_type="CartState" command=AddProduct(ProductId(1))
//! DEBUG check_availability{product_id=ProductId(1) requested=1}: In stock available=3
//! INFO Cart committed items=1 units=1
//! INFO Command ok state_type="CartState"
//! ```

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_target(false) // Don't show module paths - state_type and spans carry the context
        .compact()
        .init();
}

fn env_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
