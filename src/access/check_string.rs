use super::{AccessBehaviour, BehaviourKind};
use crate::model::Client;
use tracing::trace;

/// Substring an auth string must contain for [`CheckString`] to grant access.
pub const ADMIN_MARKER: &str = "ADMIN";

/// Grants access iff the client's auth string contains [`ADMIN_MARKER`].
///
/// Read-only: repeated calls always agree.
#[derive(Debug)]
pub struct CheckString {
    client: Box<dyn Client>,
}

impl CheckString {
    pub fn new(client: Box<dyn Client>) -> Self {
        Self { client }
    }
}

impl AccessBehaviour for CheckString {
    fn kind(&self) -> BehaviourKind {
        BehaviourKind::CheckString
    }

    fn client(&self) -> &dyn Client {
        self.client.as_ref()
    }

    fn into_client(self: Box<Self>) -> Box<dyn Client> {
        self.client
    }

    fn handle_access(&mut self) -> bool {
        let granted = self.client.auth_string().contains(ADMIN_MARKER);
        trace!(name = self.client.name(), granted, "CheckString evaluated");
        granted
    }
}
