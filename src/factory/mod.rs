//! # Client Factory
//!
//! Builds [`Client`] principals from a type tag and a user name.
//!
//! Construction is two-phase: the variant is instantiated with the raw name, then
//! [`Client::build_auth_string`] runs exactly once. Callers never see a client
//! whose auth string has not been derived.
//!
//! ```rust
//! use access_recipe::factory::ClientFactory;
//!
//! let factory = ClientFactory::new();
//! let admin = factory.create_client("Admin", "bob").unwrap();
//! assert_eq!(admin.auth_string(), "bobADMIN");
//!
//! assert!(factory.create_client("Unknown", "bob").is_none());
//! ```

use crate::model::{Admin, Client, ClientKind, Manager, User};
use tracing::debug;

/// Stateless factory for [`Client`] variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientFactory;

impl ClientFactory {
    pub fn new() -> Self {
        Self
    }

    /// Builds a client from a string tag.
    ///
    /// Returns `None` when `client_type` is not exactly `"User"`, `"Manager"` or
    /// `"Admin"`.
    pub fn create_client(&self, client_type: &str, user_name: &str) -> Option<Box<dyn Client>> {
        match client_type.parse::<ClientKind>() {
            Ok(kind) => Some(self.create(kind, user_name)),
            Err(err) => {
                debug!(client_type, error = %err, "No client built");
                None
            }
        }
    }

    /// Builds a client of a known kind and derives its auth string.
    pub fn create(&self, kind: ClientKind, user_name: &str) -> Box<dyn Client> {
        let mut client: Box<dyn Client> = match kind {
            ClientKind::User => Box::new(User::new(user_name)),
            ClientKind::Manager => Box::new(Manager::new(user_name)),
            ClientKind::Admin => Box::new(Admin::new(user_name)),
        };
        client.build_auth_string();

        debug!(kind = %kind, name = client.name(), "Client built");
        client
    }
}
