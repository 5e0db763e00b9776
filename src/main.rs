//! Demo entry point: runs a client roster through the configured channel's handler.

use access_recipe::lifecycle::{setup_tracing, AccessConfig, AccessSystem};
use tracing::{error, info, warn};

fn main() -> Result<(), String> {
    setup_tracing();

    let config = AccessConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e.to_string()
    })?;

    info!(channel = %config.channel, "Starting access recipe");

    let system = AccessSystem::new(&config);
    let span = tracing::info_span!("roster", channel = %config.channel);
    let outcomes = span.in_scope(|| system.run());

    for outcome in outcomes.iter().filter(|o| o.behaviour.is_none()) {
        warn!(client_type = %outcome.client_type, "No client built for tag");
    }

    let granted = outcomes.iter().filter(|o| o.granted == Some(true)).count();
    info!(total = outcomes.len(), granted, "Roster completed");
    Ok(())
}
