//! Logging bootstrap: compact stderr output plus a rotating file log.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initializes tracing with an env-filter (a `RUST_LOG` override wins over
/// `log_level`), a compact stderr layer, and a daily-rotated plain-text
/// file under `logs_dir`.
///
/// Returns the file appender guard; hold it for the life of the process so
/// buffered output is flushed on exit. Returns `None` when a global
/// subscriber is already installed (repeat calls from tests).
pub fn init(log_level: &str, logs_dir: &Path) -> Option<WorkerGuard> {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

	let file_appender = tracing_appender::rolling::daily(logs_dir, "taf.log");
	let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

	let stderr = std::io::stderr.with_max_level(tracing::Level::TRACE);

	let registry = tracing_subscriber::registry()
		.with(env_filter)
		.with(tracing_subscriber::fmt::layer().compact().with_writer(stderr))
		.with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(file_writer));

	match registry.try_init() {
		Ok(()) => Some(guard),
		Err(_) => None,
	}
}
