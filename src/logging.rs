//! Logging setup.
//!
//! All crates log through the `log` facade; the binaries install
//! `env_logger` as the backend. Output goes to stderr so that command results
//! on stdout stay machine-readable.
//!
//! Level precedence: `--log-level` flag, then `RUST_LOG`, then the config file.

use emoji_mixer_config::LogLevel;
use log::LevelFilter;

/// Where the effective log filter came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFilter {
    /// A single global level (CLI flag or config)
    Level(LevelFilter),
    /// `RUST_LOG` style directives, e.g. `emoji_mixer=debug,warn`
    Directives(String),
}

/// Pick the log filter from the CLI flag, the `RUST_LOG` value and the config level.
pub fn resolve_filter(
    cli_level: Option<LogLevel>,
    rust_log: Option<&str>,
    config_level: LogLevel,
) -> LogFilter {
    if let Some(level) = cli_level {
        return LogFilter::Level(level.to_level_filter());
    }
    match rust_log.map(str::trim) {
        Some(directives) if !directives.is_empty() => {
            LogFilter::Directives(directives.to_string())
        }
        _ => LogFilter::Level(config_level.to_level_filter()),
    }
}

/// Install the global logger.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(cli_level: Option<LogLevel>, config_level: LogLevel) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = resolve_filter(cli_level, rust_log.as_deref(), config_level);

    let mut builder = env_logger::Builder::new();
    match &filter {
        LogFilter::Level(level) => {
            builder.filter_level(*level);
        }
        LogFilter::Directives(directives) => {
            builder.parse_filters(directives);
        }
    }
    builder.format_timestamp_millis();

    if builder.try_init().is_ok() {
        log::debug!("Logging initialized with {:?}", filter);
    }
}

/// Logger for the standalone builder binaries: `RUST_LOG`, defaulting to `info`.
pub fn init_default() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
