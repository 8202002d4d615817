use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::core::config::AppPaths;

/// Install the global subscriber: stdout plus a daily-rolling file in the
/// log directory. The returned guard flushes the file writer on drop, so
/// the caller must keep it alive for the life of the process.
pub fn init(paths: &AppPaths) -> WorkerGuard {
    let _ = std::fs::create_dir_all(&paths.log_dir);

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&paths.log_dir, "materna.log"));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .init();

    guard
}
