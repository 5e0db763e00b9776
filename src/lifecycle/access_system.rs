use super::config::{AccessConfig, ClientSpec};
use crate::access::BehaviourKind;
use crate::handlers::ClientHandler;
use serde::Serialize;
use tracing::info;

/// What happened to one roster entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessOutcome {
    pub client_type: String,
    /// Stored client name after construction, `None` if no client was built.
    pub name: Option<String>,
    pub behaviour: Option<BehaviourKind>,
    /// Result of a single `handle_access` call.
    pub granted: Option<bool>,
}

/// Wires the configured channel's handler to a client roster.
#[derive(Debug)]
pub struct AccessSystem {
    handler: Box<dyn ClientHandler>,
    roster: Vec<ClientSpec>,
}

impl AccessSystem {
    pub fn new(config: &AccessConfig) -> Self {
        Self {
            handler: config.channel.handler(),
            roster: config.roster(),
        }
    }

    pub fn handler(&self) -> &dyn ClientHandler {
        self.handler.as_ref()
    }

    /// Builds every roster entry through the handler and evaluates its access once.
    pub fn run(&self) -> Vec<AccessOutcome> {
        self.roster
            .iter()
            .map(|spec| {
                let outcome = match self.handler.create_client(&spec.client_type, &spec.name) {
                    Some(mut access) => {
                        let granted = access.handle_access();
                        AccessOutcome {
                            client_type: spec.client_type.clone(),
                            name: Some(access.client().name().to_string()),
                            behaviour: Some(access.kind()),
                            granted: Some(granted),
                        }
                    }
                    None => AccessOutcome {
                        client_type: spec.client_type.clone(),
                        name: None,
                        behaviour: None,
                        granted: None,
                    },
                };
                info!(
                    channel = %self.handler.channel(),
                    client_type = %outcome.client_type,
                    behaviour = ?outcome.behaviour,
                    granted = ?outcome.granted,
                    "Access handled"
                );
                outcome
            })
            .collect()
    }
}
