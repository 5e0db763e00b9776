//! # System Lifecycle
//!
//! Wiring that sits above the handlers:
//!
//! - [`config`] - [`AccessConfig`] loading from JSON or the environment
//! - [`AccessSystem`] - builds the configured channel's handler and runs a client roster through it
//! - [`setup_tracing`] - initializes the logging infrastructure

pub mod access_system;
pub mod config;
pub mod telemetry;

pub use access_system::*;
pub use config::*;
pub use telemetry::*;
