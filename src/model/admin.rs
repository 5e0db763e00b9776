use super::{Client, ClientKind, ClientState};

/// Suffix appended to an admin's name when the auth string is built.
pub const ADMIN_SUFFIX: &str = "ADMIN";

/// An administrator. Starts with access granted, and its auth string is the
/// only one that carries [`ADMIN_SUFFIX`] by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Admin {
    pub state: ClientState,
}

impl Admin {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state: ClientState::new(ClientKind::Admin, name),
        }
    }
}

impl Client for Admin {
    fn kind(&self) -> ClientKind {
        ClientKind::Admin
    }

    fn state(&self) -> &ClientState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ClientState {
        &mut self.state
    }

    fn build_auth_string(&mut self) {
        self.state.name.push_str(ADMIN_SUFFIX);
        self.state.auth_string = self.state.name.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_suffix_lands_on_name_and_auth_string() {
        let mut admin = Admin::new("bob");
        assert!(admin.has_access());

        admin.build_auth_string();
        assert_eq!(admin.name(), "bobADMIN");
        assert_eq!(admin.auth_string(), "bobADMIN");
    }
}
