//! Error types for the typed client and configuration surfaces.
//!
//! The string-tag entry points (`create_client`) keep returning `None` for unknown
//! tags. Everything built on [`ClientKind`](crate::model::ClientKind) and
//! [`Channel`](crate::handlers::Channel) reports failures through [`AccessError`].

use thiserror::Error;

/// Errors that can occur while resolving clients, channels or configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccessError {
    /// The client type tag is not one of `User`, `Manager` or `Admin`.
    #[error("Unknown client type: {0}")]
    UnknownClientType(String),

    /// The channel name is not one of `retail` or `enterprise`.
    #[error("Unknown channel: {0}")]
    UnknownChannel(String),

    /// The configuration document could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AccessError {
    fn from(err: serde_json::Error) -> Self {
        AccessError::Config(err.to_string())
    }
}
