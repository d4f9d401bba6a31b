//! Tracing setup and the prefixed log helpers used throughout a run.

use std::fmt::Display;

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use suitesift_core::error::MESSAGE_PREFIX;

/// Installs the global subscriber. `RUST_LOG` overrides `level` when set.
///
/// Logs go to stderr so `--dry-run` output on stdout stays clean. Only the
/// first call in a process has an effect.
pub fn init_tracing(json: bool, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
            .ok();
    }
}

pub fn log_info(message: impl Display) {
    tracing::info!("{MESSAGE_PREFIX}{message}");
}

pub fn log_debug(message: impl Display) {
    tracing::debug!("{MESSAGE_PREFIX}{message}");
}
