use std::error::Error;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing: everything at `RUST_LOG` (default `info`) goes to the run log file,
/// warnings and errors are echoed to stderr.
pub fn init_tracing(log_path: &str) -> Result<(), Box<dyn Error>> {
    ensure_parent_dir(log_path)?;
    let log_file = OpenOptions::new().create(true).append(true).open(log_path)?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_span_events(fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE)
                .with_writer(Mutex::new(log_file)),
        )
        .with(
            fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_filter(LevelFilter::WARN),
        )
        .try_init()?;

    Ok(())
}

/// Create the directory that will hold `path`, if it has one.
pub fn ensure_parent_dir(path: impl AsRef<Path>) -> std::io::Result<()> {
    match path.as_ref().parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Run `f`, logging when it starts and how long it took.
pub fn timed<T>(name: &str, f: impl FnOnce() -> T) -> T {
    let start = Utc::now();
    info!("START {} function", name);
    let result = f();
    let elapsed = Utc::now() - start;
    let seconds = elapsed.num_microseconds().unwrap_or(i64::MAX) as f64 / 1_000_000.0;
    info!("FINISH {} function duration = {:.6} seconds", name, seconds);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_returns_closure_result() {
        assert_eq!(timed("answer", || 42), 42);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("route.csv");
        ensure_parent_dir(&nested).unwrap();
        assert!(nested.parent().unwrap().is_dir());
        assert!(ensure_parent_dir("route.csv").is_ok());
    }
}
