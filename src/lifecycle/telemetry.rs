//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Client construction** (`debug`): kind and the stored name after suffixing
//! - **Behaviour selection** (`debug`): channel, client kind and chosen policy
//! - **Unrecognised tags** (`debug`): the tag that produced no client
//! - **Access evaluation** (`trace`): every `handle_access` result
//! - **Roster runs** (`info`): one line per client in [`AccessSystem::run`](super::AccessSystem::run)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Roster outcomes only
//! RUST_LOG=info cargo run
//!
//! # Construction and behaviour selection
//! RUST_LOG=debug cargo run
//!
//! # Every access evaluation
//! RUST_LOG=trace cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=access_recipe::handlers=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` the handler span wraps the factory and binding events:
//!
//! ```text
//! DEBUG create_client{client_type="Admin" user_name="bob"}: Client built kind=Admin name="bobADMIN"
//! DEBUG create_client{client_type="Admin" user_name="bob"}: Behaviour selected channel=retail kind=Admin behaviour=CheckString
//! ```

/// Installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
