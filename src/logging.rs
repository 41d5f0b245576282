// Structured logging setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set (a local .env file may provide it). Otherwise
/// only warnings from this crate and the calling binary are shown. Logs go
/// to stderr so stdout stays reserved for the run summary.
pub fn init(bin_target: &str) {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    let default_directive = format!("tokfreq=warn,{bin_target}=warn");
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
