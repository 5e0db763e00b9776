//! # Client Handlers
//!
//! Composition roots that pair a freshly built [`Client`] with an
//! [`AccessBehaviour`]. Each business [`Channel`] has its own handler and its own
//! client-kind → behaviour mapping:
//!
//! | Client kind | [`RetailClientHandler`] | [`EnterpriseClientHandler`] |
//! |-------------|-------------------------|-----------------------------|
//! | `User`      | `SwitchAuth`            | `SwitchAuth`                |
//! | `Manager`   | `SwitchAuth`            | `CheckString`               |
//! | `Admin`     | `CheckString`           | `CheckString`               |
//!
//! Implementors only supply [`ClientHandler::behaviour_for`]; construction and
//! binding are provided methods.
//!
//! ```rust
//! use access_recipe::access::BehaviourKind;
//! use access_recipe::handlers::{ClientHandler, EnterpriseClientHandler};
//!
//! let handler = EnterpriseClientHandler::new();
//! let mut access = handler.create_client("Manager", "x").unwrap();
//! assert_eq!(access.kind(), BehaviourKind::CheckString);
//! assert!(!access.handle_access());
//! ```

pub mod enterprise;
pub mod retail;

pub use enterprise::*;
pub use retail::*;

use crate::access::{AccessBehaviour, BehaviourKind};
use crate::error::AccessError;
use crate::factory::ClientFactory;
use crate::model::{Client, ClientKind};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Business channel a handler serves.
///
/// Serializes as the lowercase name. Deserializing goes through [`FromStr`], so
/// config documents accept the same spellings as the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Channel {
    #[default]
    Retail,
    Enterprise,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Retail => "retail",
            Channel::Enterprise => "enterprise",
        }
    }

    /// Builds the handler for this channel.
    pub fn handler(&self) -> Box<dyn ClientHandler> {
        match self {
            Channel::Retail => Box::new(RetailClientHandler::new()),
            Channel::Enterprise => Box::new(EnterpriseClientHandler::new()),
        }
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = AccessError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "retail" => Ok(Channel::Retail),
            "enterprise" => Ok(Channel::Enterprise),
            _ => Err(AccessError::UnknownChannel(name.to_string())),
        }
    }
}

impl TryFrom<String> for Channel {
    type Error = AccessError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// Builds clients through an owned [`ClientFactory`] and binds each one to the
/// behaviour its channel prescribes.
pub trait ClientHandler: Debug + Send {
    /// The channel this handler serves.
    fn channel(&self) -> Channel;

    /// The factory used to build clients.
    fn factory(&self) -> &ClientFactory;

    /// The behaviour this channel assigns to a client kind.
    fn behaviour_for(&self, kind: ClientKind) -> BehaviourKind;

    /// Builds a client from a string tag and binds it to its behaviour.
    ///
    /// Returns `None` for an unrecognised `client_type`.
    #[instrument(skip(self))]
    fn create_client(&self, client_type: &str, user_name: &str) -> Option<Box<dyn AccessBehaviour>> {
        let client = self.factory().create_client(client_type, user_name)?;
        Some(self.bind(client))
    }

    /// Like [`ClientHandler::create_client`], but reports an unrecognised tag.
    fn try_create_client(
        &self,
        client_type: &str,
        user_name: &str,
    ) -> Result<Box<dyn AccessBehaviour>, AccessError> {
        let kind = client_type.parse::<ClientKind>()?;
        Ok(self.create(kind, user_name))
    }

    /// Builds a client of a known kind and binds it to its behaviour.
    fn create(&self, kind: ClientKind, user_name: &str) -> Box<dyn AccessBehaviour> {
        let client = self.factory().create(kind, user_name);
        self.bind(client)
    }

    /// Binds an already built client to the behaviour for its kind.
    fn bind(&self, client: Box<dyn Client>) -> Box<dyn AccessBehaviour> {
        let behaviour = self.behaviour_for(client.kind());
        debug!(
            channel = %self.channel(),
            kind = %client.kind(),
            behaviour = %behaviour,
            "Behaviour selected"
        );
        behaviour.bind(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_parsing() {
        assert_eq!("retail".parse::<Channel>(), Ok(Channel::Retail));
        assert_eq!(" Enterprise ".parse::<Channel>(), Ok(Channel::Enterprise));
        assert_eq!(
            "wholesale".parse::<Channel>(),
            Err(AccessError::UnknownChannel("wholesale".to_string()))
        );
    }

    #[test]
    fn test_channel_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Channel::Enterprise).unwrap(), r#""enterprise""#);
        assert_eq!(
            serde_json::from_str::<Channel>(r#"" ENTERPRISE ""#).unwrap(),
            Channel::Enterprise
        );
    }

    #[test]
    fn test_channel_builds_matching_handler() {
        for channel in [Channel::Retail, Channel::Enterprise] {
            assert_eq!(channel.handler().channel(), channel);
        }
    }

    #[test]
    fn test_try_create_client_reports_unknown_tag() {
        let handler = Channel::Retail.handler();
        let err = handler.try_create_client("Unknown", "x").unwrap_err();
        assert_eq!(err, AccessError::UnknownClientType("Unknown".to_string()));
    }
}
