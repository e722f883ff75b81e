// src/telemetry/tracing.rs
//! Logging setup for workshop-trigger.
//!
//! - Level comes from `logging.level`; `RUST_LOG` wins when set.
//! - Human-readable `fmt` output on stderr so it does not mix with command output.
//! - Routing keys are never recorded; spans `skip` them.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::app_config::LoggingConfig;

/// Installs the global subscriber. Errors if one is already installed.
pub fn init_tracing(cfg: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.level))
        .with_context(|| format!("invalid log level '{}'", cfg.level))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()
        .context("failed to set global tracing subscriber")?;

    Ok(())
}
