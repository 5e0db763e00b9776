//! # Access Behaviours
//!
//! Strategy objects that evaluate or mutate a single [`Client`]'s access state.
//!
//! A behaviour takes ownership of its client when it is bound, so each client is
//! governed by exactly one policy for as long as the behaviour lives. Call
//! [`AccessBehaviour::into_client`] to get the client back.
//!
//! | Behaviour       | `handle_access` result                        | Mutates client |
//! |-----------------|-----------------------------------------------|----------------|
//! | [`CheckString`] | auth string contains [`ADMIN_MARKER`]         | no             |
//! | [`SwitchAuth`]  | the flipped `has_access` flag                 | yes            |

pub mod check_string;
pub mod switch_auth;

pub use check_string::*;
pub use switch_auth::*;

use crate::model::Client;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Which access policy a behaviour applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BehaviourKind {
    CheckString,
    SwitchAuth,
}

impl BehaviourKind {
    /// Binds a client to a new behaviour of this kind.
    pub fn bind(self, client: Box<dyn Client>) -> Box<dyn AccessBehaviour> {
        match self {
            BehaviourKind::CheckString => Box::new(CheckString::new(client)),
            BehaviourKind::SwitchAuth => Box::new(SwitchAuth::new(client)),
        }
    }
}

impl Display for BehaviourKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BehaviourKind::CheckString => f.write_str("CheckString"),
            BehaviourKind::SwitchAuth => f.write_str("SwitchAuth"),
        }
    }
}

/// A policy bound to exactly one [`Client`].
pub trait AccessBehaviour: Debug + Send {
    /// Which policy this is.
    fn kind(&self) -> BehaviourKind;

    /// The bound client.
    fn client(&self) -> &dyn Client;

    /// Releases the bound client.
    fn into_client(self: Box<Self>) -> Box<dyn Client>;

    /// Evaluates (and possibly mutates) the client's access state.
    fn handle_access(&mut self) -> bool;
}
