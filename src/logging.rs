//! Logging Setup
//!
//! Installs the global `tracing` subscriber, writing either to the terminal
//! or appended to a log file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, LogOutput, LogScope};
use crate::error::{Error, Result};

/// Builds the filter: `RUST_LOG` wins, otherwise the configured scope.
fn env_filter(scope: LogScope) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(scope.as_directive()))
}

/// Initializes the global tracing subscriber from the configuration.
///
/// Can only succeed once per process; later calls return `Error::Logging`.
pub fn init_logging(config: &Config) -> Result<()> {
    let filter = env_filter(config.log_scope);

    let installed = match &config.log_output {
        LogOutput::Terminal => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .try_init(),
        LogOutput::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()
        }
    };

    installed.map_err(|e| Error::Logging(e.to_string()))
}
