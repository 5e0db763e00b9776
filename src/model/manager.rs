use super::{Client, ClientKind, ClientState};

/// Suffix appended to a manager's name when the auth string is built.
pub const MANAGER_SUFFIX: &str = "MAN";

/// A manager. Starts with access granted.
#[derive(Debug, Clone, PartialEq)]
pub struct Manager {
    pub state: ClientState,
}

impl Manager {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state: ClientState::new(ClientKind::Manager, name),
        }
    }
}

impl Client for Manager {
    fn kind(&self) -> ClientKind {
        ClientKind::Manager
    }

    fn state(&self) -> &ClientState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ClientState {
        &mut self.state
    }

    /// Appends [`MANAGER_SUFFIX`] to the stored name itself, then copies the
    /// result into the auth string.
    fn build_auth_string(&mut self) {
        self.state.name.push_str(MANAGER_SUFFIX);
        self.state.auth_string = self.state.name.clone();
    }
}
