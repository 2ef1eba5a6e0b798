//! Logging initialization for the service binary
//!
//! Supports configuration-based logging with JSON or human-readable output,
//! optional rolling file appenders, and `RUST_LOG` environment overrides.

use std::fs;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize logging from configuration.
///
/// Returns the non-blocking writer guard when file logging is enabled; it must
/// be kept alive for the duration of the program so buffered lines are flushed.
pub fn init_logging(
    config: &LoggingConfig,
) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let env_filter = build_env_filter(config);
    let subscriber = tracing_subscriber::registry().with(env_filter);

    let guard = if config.json {
        let console_layer = fmt::layer().json().with_writer(std::io::stdout);
        if config.file_enabled {
            let (file_appender, file_guard) = create_file_appender(config)?;
            let file_layer = fmt::layer().json().with_writer(file_appender);
            subscriber.with(console_layer).with(file_layer).init();
            Some(file_guard)
        } else {
            subscriber.with(console_layer).init();
            None
        }
    } else {
        let console_layer = fmt::layer().with_target(true).with_writer(std::io::stdout);
        if config.file_enabled {
            let (file_appender, file_guard) = create_file_appender(config)?;
            let file_layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(file_appender);
            subscriber.with(console_layer).with(file_layer).init();
            Some(file_guard)
        } else {
            subscriber.with(console_layer).init();
            None
        }
    };

    tracing::info!(level = %config.level, json = config.json, "Logging initialized");

    Ok(guard)
}

fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "merx={},merx_server={},tower_http=info",
            config.level, config.level
        ))
    })
}

fn create_file_appender(
    config: &LoggingConfig,
) -> anyhow::Result<(
    tracing_appender::non_blocking::NonBlocking,
    tracing_appender::non_blocking::WorkerGuard,
)> {
    fs::create_dir_all(&config.file_directory)?;

    let file_appender = match config.file_rotation.as_str() {
        "daily" => tracing_appender::rolling::daily(&config.file_directory, &config.file_prefix),
        "hourly" => tracing_appender::rolling::hourly(&config.file_directory, &config.file_prefix),
        "minutely" => {
            tracing_appender::rolling::minutely(&config.file_directory, &config.file_prefix)
        }
        "never" => tracing_appender::rolling::never(
            &config.file_directory,
            format!("{}.log", config.file_prefix),
        ),
        _ => tracing_appender::rolling::daily(&config.file_directory, &config.file_prefix),
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    Ok((non_blocking, guard))
}
