use std::{fs::OpenOptions, io, sync::Mutex};

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber.
///
/// The interactive dashboard owns stdout and stderr, so without `--log-file`
/// only one-shot runs get a subscriber (on stderr).
pub fn init(cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|err| anyhow!("failed to install file logger: {err}"))?;
    } else if cli.one_shot {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(io::stderr)
            .try_init()
            .map_err(|err| anyhow!("failed to install stderr logger: {err}"))?;
    }
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
