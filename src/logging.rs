//! Diagnostic logging setup (stderr, tracing-subscriber).

use tracing_subscriber::EnvFilter;

/// `debug` for this crate when the config asks for it, `warn` otherwise.
/// `RUST_LOG` wins over both.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "warn" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,mighty={level}")));

    // già inizializzato (test o doppia chiamata): va bene così
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
