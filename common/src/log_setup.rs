use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::{MakeWriter, MakeWriterExt, Tee, WithMaxLevel};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `base_level`. Console output goes to stdout,
/// with warnings and errors mirrored to stderr. When `log_dir` is given, a
/// daily-rotated plain-text log file is written there as well.
pub fn setup_logging(base_level: &str, log_dir: Option<&Path>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(base_level))
        .with_context(|| format!("Invalid log filter: {base_level}"))?;

    let console = console_writer(std::io::stdout, std::io::stderr);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(console);

    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let file_appender = tracing_appender::rolling::Builder::new()
                .rotation(tracing_appender::rolling::Rotation::DAILY)
                .filename_prefix("despeckle")
                .filename_suffix("log")
                .max_log_files(5)
                .build(dir)
                .context("Failed to create log file appender")?;

            let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
            LOG_GUARD
                .set(guard)
                .map_err(|_| anyhow::anyhow!("Logging already initialized"))?;

            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_ansi(false)
                    .with_writer(file_writer)
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Logger initialization failed")?;

    Ok(())
}

/// Everything goes to `stdout`; WARN and ERROR are also copied to `stderr`.
fn console_writer<O, E>(stdout: O, stderr: E) -> Tee<O, WithMaxLevel<E>>
where
    O: for<'a> MakeWriter<'a>,
    E: for<'a> MakeWriter<'a>,
{
    stdout.and(stderr.with_max_level(Level::WARN))
}
