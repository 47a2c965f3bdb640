use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_FILE: &str = "./logs/gsg.log";

/// Install stdout and file logging, filtered by `TRACING_LEVEL` (default
/// `info`). The file goes to `LOG_FILE_PATH`. The returned guard flushes the
/// file writer when dropped, so keep it alive for the whole run.
pub fn init_logger() -> impl Drop {
    let filter = env::var("TRACING_LEVEL").unwrap_or_else(|_| "info".to_string());
    let filter_layer = EnvFilter::new(filter);

    let log_file_path =
        PathBuf::from(env::var("LOG_FILE_PATH").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string()));
    let log_dir = log_file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let log_file_name = log_file_path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "gsg.log".into());

    let file_appender = tracing_appender::rolling::never(log_dir, log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stdout)
                .pretty()
                .with_file(false)
                .with_line_number(false)
                .without_time()
                .with_ansi(true),
        )
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .with(filter_layer)
        .init();

    debug!("Logging to stdout and {}", log_file_path.display());

    guard
}
