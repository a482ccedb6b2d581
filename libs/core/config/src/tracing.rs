use crate::Environment;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in main() before any fallible operations. Safe to call
/// multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize tracing to stdout with environment-aware formatting.
///
/// - **Production** (`APP_ENV=production`): flattened JSON, no module targets
/// - **Development** (default): pretty, human-readable output
///
/// Both include `tracing_error::ErrorLayer` so span traces are captured on
/// errors. `RUST_LOG` overrides the default filter.
///
/// Safe to call multiple times; later calls are ignored (common in tests).
pub fn init_tracing(environment: &Environment) {
    let result = try_init_with_writer(environment, io::stdout, true);
    report_init(environment, result);
}

/// Same as [`init_tracing`], but appends output to `path` instead of stdout.
///
/// ANSI colouring is disabled so the file stays greppable.
pub fn init_tracing_with_file(environment: &Environment, path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let result = try_init_with_writer(environment, Mutex::new(file), false);
    report_init(environment, result);
    info!(path = %path.display(), "Writing logs to file");
    Ok(())
}

fn default_filter(is_production: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if is_production {
            EnvFilter::new("info,sea_orm=warn,sqlx=warn")
        } else {
            EnvFilter::new("debug,sqlx=info")
        }
    })
}

fn try_init_with_writer<W>(
    environment: &Environment,
    writer: W,
    ansi: bool,
) -> Result<(), TryInitError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let is_production = environment.is_production();
    let filter = default_filter(is_production);

    if is_production {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true)
                    .with_writer(writer),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .with_ansi(ansi)
                    .with_writer(writer)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    }
}

fn report_init(environment: &Environment, result: Result<(), TryInitError>) {
    match result {
        Ok(_) => {
            info!(
                "Tracing initialized with ErrorLayer. Environment: {:?}",
                environment
            );
        }
        Err(_) => {
            debug!("Tracing already initialized, skipping re-initialization");
        }
    }
}
