use std::io;

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing subscriber with sensible defaults and stdout writer.
/// - Loads `.env` first so `RUST_LOG` can come from a dotfile
/// - Respects `RUST_LOG` if set, falls back to `info`
/// - Safe to call more than once (later calls are no-ops)
pub fn init_logging_default() {
    let _ = dotenvy::dotenv();
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}
