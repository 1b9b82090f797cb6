use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging to stderr.
///
/// Use `RUST_LOG` environment variable to override the default filter.
/// Default is `warn`, which surfaces invalid opcodes and assembler warnings.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
