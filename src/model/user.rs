use super::{Client, ClientKind, ClientState};

/// A regular user. Starts without access and uses its name verbatim as the
/// auth string.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub state: ClientState,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `name` - User's display name
    ///
    /// # Notes
    /// The auth string stays empty until [`Client::build_auth_string`] is called.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state: ClientState::new(ClientKind::User, name),
        }
    }
}

impl Client for User {
    fn kind(&self) -> ClientKind {
        ClientKind::User
    }

    fn state(&self) -> &ClientState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ClientState {
        &mut self.state
    }

    fn build_auth_string(&mut self) {
        self.state.auth_string = self.state.name.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_starts_without_access() {
        let user = User::new("bob");
        assert!(!user.has_access());
        assert!(user.auth_string().is_empty());
    }

    #[test]
    fn test_user_auth_string_is_name() {
        let mut user = User::new("bob");
        user.build_auth_string();
        assert_eq!(user.auth_string(), "bob");
        assert_eq!(user.name(), "bob");

        user.build_auth_string();
        assert_eq!(user.auth_string(), "bob");
    }
}
