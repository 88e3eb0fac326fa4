// src/util/log.rs

//! Logging helpers - `tracing` events behind the crate's `log_*` macros
use std::path::Path;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[doc(hidden)]
pub use tracing;

pub static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

pub const LOG_FILE_NAME: &str = "model-config-check.log";

/// Filter used when `RUST_LOG` is unset; `DEBUG=true` lowers it to debug
pub fn default_filter(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    format!("model_config_validation={level},model_config_check={level}")
}

/// Whether `DEBUG=true` was set when the first debug event fired
pub fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("DEBUG").unwrap_or_default() == "true")
}

/// Install the global subscriber: stderr always, plus a log file when `log_dir` is given.
///
/// The returned guard flushes the file writer on drop, so keep it alive for the
/// lifetime of the process.
pub fn init_logging(log_dir: Option<&Path>) -> std::io::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug_enabled())));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Convenience macro for error logging with formatting
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        $crate::util::log::tracing::error!($($arg)*);
    }};
}

/// Convenience macro for warning logging with formatting
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        $crate::util::log::tracing::warn!($($arg)*);
    }};
}

/// Convenience macro for info logging with formatting
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        $crate::util::log::tracing::info!($($arg)*);
    }};
}

/// Convenience macro for debug logging with formatting
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if $crate::util::log::debug_enabled() {
            $crate::util::log::tracing::debug!($($arg)*);
        }
    }};
}
