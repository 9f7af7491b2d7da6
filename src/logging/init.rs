use anyhow::{Context, Result};

/// Base filter for the given flags: -q → "warn", -v/-vv → "debug"/"trace".
pub const fn base_level(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "warn";
    }
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing on stderr. `RUST_LOG` (if set) takes precedence.
///
/// Step echo lines are emitted at info, so `--quiet` silences them.
///
/// # Errors
/// Returns an error if the filter does not parse.
pub fn init_tracing(verbosity: u8, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let base = base_level(verbosity, quiet);
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| base.to_string());

    let fmt_layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);
    let filter_layer = EnvFilter::try_new(filter).context("invalid RUST_LOG / filter")?;

    // Allow re-init to be a no-op in tests
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();

    Ok(())
}
