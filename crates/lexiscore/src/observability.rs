//! Logging setup for the CLI.
//!
//! Human-readable events go to stderr (stdout carries reports and the MCP
//! transport). When a log location is configured, the same events are also
//! written as JSON lines through a non-blocking file appender.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Explicit log file path.
pub const ENV_LOG_PATH: &str = "LEXISCORE_LOG_PATH";

/// Log directory; the file inside it is [`LOG_FILE_NAME`].
pub const ENV_LOG_DIR: &str = "LEXISCORE_LOG_DIR";

/// File name used when only a log directory is known.
pub const LOG_FILE_NAME: &str = "lexiscore.jsonl";

/// Where (if anywhere) to write the JSONL log file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Full path of the log file, or `None` for stderr only.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log file from the environment, falling back to the
    /// configured log directory.
    ///
    /// Precedence: `LEXISCORE_LOG_PATH`, then `LEXISCORE_LOG_DIR`, then
    /// `config_log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(ENV_LOG_PATH).map(PathBuf::from),
            std::env::var_os(ENV_LOG_DIR).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        env_log_dir: Option<PathBuf>,
        config_log_dir: Option<PathBuf>,
    ) -> Self {
        let log_file = log_path.or_else(|| {
            env_log_dir
                .or(config_log_dir)
                .map(|dir| dir.join(LOG_FILE_NAME))
        });
        Self { log_file }
    }
}

/// Build the event filter.
///
/// `-q` and `-v` win over everything; otherwise `RUST_LOG` is honored when
/// set, and the configured level applies to this workspace's crates.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "warn,lexiscore={config_level},lexiscore_core={config_level}"
            ))
        }),
        1 => EnvFilter::new("warn,lexiscore=debug,lexiscore_core=debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Install the global subscriber.
///
/// Returns the file appender's guard when file logging is active; keep it
/// alive until exit so buffered events are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match config.log_file {
        Some(ref path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from);
            let file_name = path
                .file_name()
                .with_context(|| format!("log path has no file name: {}", path.display()))?;
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(&dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
