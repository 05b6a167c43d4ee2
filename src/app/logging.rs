use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "PROJEXBUZZ_LOG";

/// Initialize logging to stderr, filtered by `PROJEXBUZZ_LOG` (default `warn`).
///
/// Stdout is reserved for the generated post.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed when embedded in another binary.
    let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
