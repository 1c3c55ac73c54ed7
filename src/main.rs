mod banner;
mod cli;
mod commands;
mod config;
mod console;
mod constants;
mod help;
mod help_system;
mod launcher;
mod registry;
mod router;
mod state;
mod update;
mod version;

use chrono::Local;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::constants::LOG_ENV_VAR;
use crate::router::RouteError;
use crate::state::AppState;
use crate::update::ProxiedReleaseSource;

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::from_env();
    let state = AppState::new();
    tracing::debug!(base_dir = %state.base_dir().display(), "starting dispatcher");

    let routed = router::route(&cli.args);
    let source = ProxiedReleaseSource::new();
    let result = commands::run(&state, routed, &source, Local::now().naive_local());

    if let Err(err) = result {
        console::error(format!("{err:#}"));
        if let Some(RouteError::NoHelpForParameter { .. }) = err.downcast_ref::<RouteError>() {
            console::info(help_system::unknown_topic_hint());
        }
        std::process::exit(1);
    }
}
