//! Tracing subscriber setup for the server binary.

use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

/// File name prefix for the daily log files.
pub const LOG_FILE_PREFIX: &str = "lingo-bridge.log";

/// `RUST_LOG`, else the configured directive, else `info`.
fn filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Builds the subscriber: a console layer on `console` plus a daily file layer when a
/// directory is configured. The guard must outlive all logging to the file.
pub fn subscriber<W>(
    logging: &LoggingConfig,
    console: W,
) -> (impl Subscriber + Send + Sync + 'static, Option<WorkerGuard>)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (file_layer, guard) = match &logging.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter(logging))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(console))
        .with(file_layer);
    (subscriber, guard)
}

/// Installs the global subscriber with the console on stderr.
#[must_use]
pub fn init(logging: &LoggingConfig) -> Option<WorkerGuard> {
    let (subscriber, guard) = subscriber(logging, std::io::stderr);
    subscriber.init();
    guard
}
