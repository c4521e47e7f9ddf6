//! Tracing subscriber setup used by the server.

use std::{env, sync::OnceLock};

use tracing_appender::{
    non_blocking,
    non_blocking::NonBlocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{fmt, time::ChronoLocal, writer::MakeWriterExt},
};

/// Guard to ensure buffered logs are flushed on shutdown.
static LOG_GUARD: OnceLock<non_blocking::WorkerGuard> = OnceLock::new();

/// `RUST_LOG` filters (default `info`), `LOG_FORMAT=json` switches to JSON
/// lines and `LOG_DIR` adds a daily rotated log file.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false)
        .with_level(true);

    let file_writer = env::var("LOG_DIR").ok().and_then(init_file_writer);

    match (file_writer, json) {
        (Some(file), true) => {
            let stdout = std::io::stdout.with_max_level(tracing::Level::INFO);
            builder.json().with_writer(stdout.and(file)).init();
        }
        (Some(file), false) => {
            let stdout = std::io::stdout.with_max_level(tracing::Level::INFO);
            builder.with_ansi(true).with_writer(stdout.and(file)).init();
        }
        (None, true) => builder.json().init(),
        (None, false) => builder.with_ansi(true).init(),
    }

    tracing::info!("logger initialized");
}

fn init_file_writer(dir: String) -> Option<NonBlocking> {
    let max_files = env::var("LOG_MAX_FILES")
        .ok()
        .and_then(|v| v.parse::<usize>().ok());

    let mut file_builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("summoner-history.log");

    if let Some(n) = max_files {
        file_builder = file_builder.max_log_files(n);
    }

    let file_appender = match file_builder.build(&dir) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("failed to create log file in {dir}: {e}");
            return None;
        }
    };

    let (file_writer, guard) = non_blocking(file_appender);

    // Only the first guard is kept; `init` runs once per process.
    let _ = LOG_GUARD.set(guard);

    Some(file_writer)
}
