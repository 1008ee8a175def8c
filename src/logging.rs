//! Opt-in `tracing` subscriber for binaries and tests embedding tilecut.
//! The library itself only emits events; nothing is printed unless a subscriber exists.
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static LOGGING_INIT: OnceCell<()> = OnceCell::new();

/// Installs a fmt subscriber filtered by `RUST_LOG`, or by `default_directive`
/// (e.g. `"tilecut=debug"`) when the variable is unset or invalid. Later calls are no-ops,
/// as is the first call when another global subscriber is already set.
pub fn init_logging(default_directive: &str) {
    LOGGING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_thread_names(true)
            .try_init();
    });
}
