use super::{Channel, ClientHandler};
use crate::access::BehaviourKind;
use crate::factory::ClientFactory;
use crate::model::ClientKind;

/// Handler for the enterprise channel. Managers and admins are both checked by
/// auth string; only users get a toggling flag.
#[derive(Debug, Clone, Default)]
pub struct EnterpriseClientHandler {
    factory: ClientFactory,
}

impl EnterpriseClientHandler {
    pub fn new() -> Self {
        Self::with_factory(ClientFactory::new())
    }

    pub fn with_factory(factory: ClientFactory) -> Self {
        Self { factory }
    }
}

impl ClientHandler for EnterpriseClientHandler {
    fn channel(&self) -> Channel {
        Channel::Enterprise
    }

    fn factory(&self) -> &ClientFactory {
        &self.factory
    }

    fn behaviour_for(&self, kind: ClientKind) -> BehaviourKind {
        match kind {
            ClientKind::User => BehaviourKind::SwitchAuth,
            ClientKind::Manager => BehaviourKind::CheckString,
            ClientKind::Admin => BehaviourKind::CheckString,
        }
    }
}
