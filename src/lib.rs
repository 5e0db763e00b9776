//! # Access Recipe
//!
//! > **A Recipe for Factory-built Clients with Strategy-based Access Control.**
//!
//! This crate pairs two classic patterns:
//! - **Factory**: [`ClientFactory`](factory::ClientFactory) turns a type tag and a name into a
//!   [`Client`](model::Client) principal and derives its auth string.
//! - **Strategy**: an [`AccessBehaviour`](access::AccessBehaviour) owns one client and decides
//!   (or toggles) its access.
//!
//! A [`ClientHandler`](handlers::ClientHandler) glues the two together, choosing the policy per
//! business [`Channel`](handlers::Channel).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Principals ([`model`])
//! - **Role**: The [`Client`](model::Client) trait and its three variants.
//! - **Key items**: [`User`](model::User), [`Manager`](model::Manager), [`Admin`](model::Admin),
//!   [`ClientKind`](model::ClientKind).
//!
//! ### 2. The Factory ([`factory`])
//! - **Role**: Two-phase construction (instantiate, then `build_auth_string` once).
//!
//! ### 3. The Policies ([`access`])
//! - **Key items**: [`CheckString`](access::CheckString), [`SwitchAuth`](access::SwitchAuth).
//!
//! ### 4. The Composition Roots ([`handlers`])
//! - **Key items**: [`RetailClientHandler`](handlers::RetailClientHandler),
//!   [`EnterpriseClientHandler`](handlers::EnterpriseClientHandler).
//!
//! ### 5. The Wiring ([`lifecycle`])
//! - **Role**: Configuration, logging setup and the demo roster runner.
//!
//! ## Architecture Notes
//!
//! ### Silent and typed failure
//! The string entry points (`create_client`) return `None` for an unknown tag. The typed entry
//! points parse tags into [`ClientKind`](model::ClientKind) and return
//! [`AccessError`](error::AccessError) instead.
//!
//! ### Name suffixing
//! Managers and admins append `MAN` / `ADMIN` to their stored name, not only to the auth string.
//! A manager built as `"bob"` reports `name() == "bobMAN"`.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use access_recipe::handlers::{ClientHandler, RetailClientHandler};
//!
//! let handler = RetailClientHandler::new();
//! let mut access = handler.create_client("User", "alice").unwrap();
//! assert!(access.handle_access());
//! assert!(!access.handle_access());
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info ACCESS_RECIPE_CHANNEL=enterprise cargo run
//! ```

pub mod access;
pub mod error;
pub mod factory;
pub mod handlers;
pub mod lifecycle;
pub mod model;
