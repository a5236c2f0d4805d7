//! Process startup: configuration, logging, and module wiring.

use crate::{build_roster_module, RosterModule};
use roster_config::{AppConfig, ConfigLoader};
use roster_core::{init_telemetry, RosterResult};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Initializes logging from `config` and builds an empty [`RosterModule`].
///
/// Console logging installs a global subscriber, so with
/// `telemetry.console_output` enabled this succeeds once per process.
pub fn bootstrap(config: &AppConfig) -> RosterResult<Arc<RosterModule>> {
    init_telemetry(&config.telemetry)?;

    info!(
        app_name = %config.app.name,
        version = %config.app.version,
        environment = %config.app.environment,
        "Starting roster"
    );

    Ok(build_roster_module())
}

/// Loads layered configuration from `config_dir`, then [`bootstrap`]s.
pub fn bootstrap_from_dir(config_dir: impl Into<PathBuf>) -> RosterResult<Arc<RosterModule>> {
    let config = ConfigLoader::new(config_dir)?.into_config();
    bootstrap(&config)
}
