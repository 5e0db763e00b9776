use super::{AccessBehaviour, BehaviourKind};
use crate::model::Client;
use tracing::trace;

/// Flips the client's `has_access` flag on every call and returns the new value.
#[derive(Debug)]
pub struct SwitchAuth {
    client: Box<dyn Client>,
}

impl SwitchAuth {
    pub fn new(client: Box<dyn Client>) -> Self {
        Self { client }
    }
}

impl AccessBehaviour for SwitchAuth {
    fn kind(&self) -> BehaviourKind {
        BehaviourKind::SwitchAuth
    }

    fn client(&self) -> &dyn Client {
        self.client.as_ref()
    }

    fn into_client(self: Box<Self>) -> Box<dyn Client> {
        self.client
    }

    fn handle_access(&mut self) -> bool {
        let has_access = !self.client.has_access();
        self.client.set_has_access(has_access);
        trace!(name = self.client.name(), has_access, "SwitchAuth toggled");
        has_access
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Manager, User};

    #[test]
    fn test_switch_auth_toggles_user() {
        let mut switch = SwitchAuth::new(Box::new(User::new("bob")));
        assert!(switch.handle_access());
        assert!(switch.client().has_access());
        assert!(!switch.handle_access());
        assert!(!switch.client().has_access());
    }

    #[test]
    fn test_switch_auth_twice_restores_manager() {
        let mut switch = SwitchAuth::new(Box::new(Manager::new("bob")));
        assert!(!switch.handle_access());
        assert!(switch.handle_access());

        let client = Box::new(switch).into_client();
        assert!(client.has_access());
    }
}
