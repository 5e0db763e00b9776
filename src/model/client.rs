//! # Client Trait
//!
//! The `Client` trait is the contract shared by every principal the
//! [`ClientFactory`](crate::factory::ClientFactory) can build. It exposes the name,
//! the derived auth string and the access flag, plus the `build_auth_string` hook
//! the factory runs once after construction.
//!
//! Access behaviours only ever see a `dyn Client`, so the same
//! [`CheckString`](crate::access::CheckString) or [`SwitchAuth`](crate::access::SwitchAuth)
//! policy works for users, managers and admins alike.

use crate::error::AccessError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::str::FromStr;

/// The closed set of client kinds the factory knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientKind {
    User,
    Manager,
    Admin,
}

impl ClientKind {
    /// Every kind, in declaration order.
    pub const ALL: [ClientKind; 3] = [ClientKind::User, ClientKind::Manager, ClientKind::Admin];

    /// The literal tag accepted by the string-based factory entry points.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientKind::User => "User",
            ClientKind::Manager => "Manager",
            ClientKind::Admin => "Admin",
        }
    }

    /// Whether a freshly built client of this kind starts with access granted.
    pub fn default_access(&self) -> bool {
        match self {
            ClientKind::User => false,
            ClientKind::Manager | ClientKind::Admin => true,
        }
    }
}

impl Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tags are matched exactly; `"admin"` is not an `Admin`.
impl FromStr for ClientKind {
    type Err = AccessError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "User" => Ok(ClientKind::User),
            "Manager" => Ok(ClientKind::Manager),
            "Admin" => Ok(ClientKind::Admin),
            other => Err(AccessError::UnknownClientType(other.to_string())),
        }
    }
}

/// Fields every client variant carries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientState {
    pub name: String,
    /// Empty until [`Client::build_auth_string`] runs.
    pub auth_string: String,
    pub has_access: bool,
}

impl ClientState {
    /// State for a freshly constructed client of `kind`.
    pub fn new(kind: ClientKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            auth_string: String::new(),
            has_access: kind.default_access(),
        }
    }
}

/// A named principal with an access flag and a derived auth string.
///
/// # Lifecycle
/// 1. Constructed with a name; `auth_string` is empty.
/// 2. [`Client::build_auth_string`] runs exactly once (the factory guarantees this).
/// 3. Access behaviours read `auth_string` or flip `has_access` from then on.
///
/// Variants only implement [`Client::kind`], the state accessors and
/// [`Client::build_auth_string`]; the rest are provided.
pub trait Client: Debug + Send {
    /// Which variant this is.
    fn kind(&self) -> ClientKind;

    fn state(&self) -> &ClientState;

    fn state_mut(&mut self) -> &mut ClientState;

    /// The stored name. For managers and admins this carries the suffix added by
    /// [`Client::build_auth_string`].
    fn name(&self) -> &str {
        &self.state().name
    }

    /// The derived auth string, empty until [`Client::build_auth_string`] runs.
    fn auth_string(&self) -> &str {
        &self.state().auth_string
    }

    fn has_access(&self) -> bool {
        self.state().has_access
    }

    fn set_has_access(&mut self, has_access: bool) {
        self.state_mut().has_access = has_access;
    }

    /// Derives the auth string from the name.
    ///
    /// Not idempotent for managers and admins: the suffix is appended to the
    /// stored name on every call, so a second call on a manager built as
    /// `"bob"` leaves both name and auth string as `"bobMANMAN"`.
    fn build_auth_string(&mut self);
}
