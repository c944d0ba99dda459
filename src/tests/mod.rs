mod tree_properties;

use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static LOGGING: Once = Once::new();

/// Install a global subscriber once for the whole test binary.
/// The level comes from `RUST_LOG`, defaulting to `trace`
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        if tracing::dispatcher::has_been_set() {
            return;
        }
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_target(true)
                .with_test_writer()
                .with_filter(env_filter),
        );
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    });
}
