use super::{Channel, ClientHandler};
use crate::access::BehaviourKind;
use crate::factory::ClientFactory;
use crate::model::ClientKind;

/// Handler for the retail channel. Only admins are checked by auth string;
/// users and managers get a toggling flag.
#[derive(Debug, Clone, Default)]
pub struct RetailClientHandler {
    factory: ClientFactory,
}

impl RetailClientHandler {
    pub fn new() -> Self {
        Self::with_factory(ClientFactory::new())
    }

    pub fn with_factory(factory: ClientFactory) -> Self {
        Self { factory }
    }
}

impl ClientHandler for RetailClientHandler {
    fn channel(&self) -> Channel {
        Channel::Retail
    }

    fn factory(&self) -> &ClientFactory {
        &self.factory
    }

    fn behaviour_for(&self, kind: ClientKind) -> BehaviourKind {
        match kind {
            ClientKind::User => BehaviourKind::SwitchAuth,
            ClientKind::Manager => BehaviourKind::SwitchAuth,
            ClientKind::Admin => BehaviourKind::CheckString,
        }
    }
}
