use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Installs a stderr subscriber; `RUST_LOG` takes precedence over the configured level.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_logging(logging: &LoggingConfig) -> bool {
    let level = logging.level().unwrap_or(Level::INFO);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr);

    if logging.json {
        let subscriber = builder.json().with_current_span(false).finish();
        tracing::subscriber::set_global_default(subscriber).is_ok()
    } else {
        tracing::subscriber::set_global_default(builder.finish()).is_ok()
    }
}
