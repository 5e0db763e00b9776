//! # Configuration
//!
//! [`AccessConfig`] selects the business channel and, optionally, the roster of
//! clients the demo runs through it. It is loaded from a JSON document or from
//! the environment:
//!
//! | Variable                | Meaning                                        |
//! |-------------------------|------------------------------------------------|
//! | `ACCESS_RECIPE_CONFIG`  | path to a JSON config file (takes precedence)  |
//! | `ACCESS_RECIPE_CHANNEL` | `retail` or `enterprise`                       |
//!
//! ```json
//! {
//!   "channel": "enterprise",
//!   "clients": [
//!     { "client_type": "Manager", "name": "bob" }
//!   ]
//! }
//! ```

use crate::error::AccessError;
use crate::handlers::Channel;
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::fs;
use tracing::debug;

/// Environment variable naming a JSON config file.
pub const CONFIG_PATH_ENV: &str = "ACCESS_RECIPE_CONFIG";

/// Environment variable naming the channel.
pub const CHANNEL_ENV: &str = "ACCESS_RECIPE_CHANNEL";

/// One entry of the client roster.
///
/// `client_type` stays a raw tag so unrecognised kinds can be listed and are
/// reported as absent rather than rejected at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSpec {
    pub client_type: String,
    pub name: String,
}

impl ClientSpec {
    pub fn new(client_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            client_type: client_type.into(),
            name: name.into(),
        }
    }

    /// One client of every known kind plus one unrecognised tag.
    pub fn demo_roster() -> Vec<ClientSpec> {
        vec![
            ClientSpec::new("User", "alice"),
            ClientSpec::new("Manager", "bob"),
            ClientSpec::new("Admin", "carol"),
            ClientSpec::new("Unknown", "mallory"),
        ]
    }
}

/// Runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    pub channel: Channel,
    pub clients: Vec<ClientSpec>,
}

impl AccessConfig {
    /// Parses a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, AccessError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the file named by [`CONFIG_PATH_ENV`] if set, otherwise builds a
    /// config from [`CHANNEL_ENV`] (defaulting to retail).
    pub fn from_env() -> Result<Self, AccessError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Same as [`AccessConfig::from_env`], reading variables through `lookup`.
    ///
    /// Only [`VarError::NotPresent`] counts as unset; a value that is not valid
    /// UTF-8 is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AccessError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        match lookup(CONFIG_PATH_ENV) {
            Ok(path) => {
                debug!(path = %path, "Loading config file");
                let json = fs::read_to_string(&path)
                    .map_err(|e| AccessError::Config(format!("{path}: {e}")))?;
                return Self::from_json(&json);
            }
            Err(VarError::NotPresent) => {}
            Err(VarError::NotUnicode(raw)) => {
                return Err(AccessError::Config(format!(
                    "{CONFIG_PATH_ENV} is not valid UTF-8: {raw:?}"
                )));
            }
        }

        let channel = match lookup(CHANNEL_ENV) {
            Ok(name) => name.parse()?,
            Err(VarError::NotPresent) => Channel::default(),
            Err(VarError::NotUnicode(raw)) => {
                return Err(AccessError::UnknownChannel(raw.to_string_lossy().into_owned()));
            }
        };
        Ok(Self {
            channel,
            ..Self::default()
        })
    }

    /// The configured roster, or [`ClientSpec::demo_roster`] when none is given.
    pub fn roster(&self) -> Vec<ClientSpec> {
        if self.clients.is_empty() {
            ClientSpec::demo_roster()
        } else {
            self.clients.clone()
        }
    }
}
