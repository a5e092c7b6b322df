//! Global tracing subscriber for the desktop app.

use crate::config::Config;
use chrono::Utc;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Formats event timestamps in a fixed offset instead of the host's UTC clock.
#[derive(Debug, Clone, Copy)]
struct FixedOffsetTimer {
    timezone: chrono::FixedOffset,
}

impl FormatTime for FixedOffsetTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let local_time = Utc::now().with_timezone(&self.timezone);
        write!(w, "{}", local_time.format("%Y-%m-%d %I:%M:%S%.3f %p"))
    }
}

/// `RUST_LOG` wins over `config.log_filter` when set.
pub fn init(config: &Config) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));

    let stdout_layer = fmt::layer()
        .with_target(false)
        .with_timer(FixedOffsetTimer {
            timezone: config.logger_timezone,
        })
        .with_writer(std::io::stdout);

    let subscriber = Registry::default().with(env_filter).with(stdout_layer);
    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!("Logging initialized with filter {}", config.log_filter);
    Ok(())
}
