pub mod api;
pub mod classifier;
pub mod config;
pub mod encoder;
pub mod engine;
pub mod labels;
pub mod reference;
pub mod vocabulary;

use tracing_subscriber::EnvFilter;

/// Initialize tracing from `RUST_LOG`, falling back to the default filter.
/// Called once at process startup.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
