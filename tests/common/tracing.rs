#![cfg(test)]

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Crate events shown when `RUST_LOG` is unset; the test writer keeps them
/// out of passing tests' output
const DEFAULT_TEST_FILTER: &str = "world_clock=debug";

/// Install the test subscriber once per test binary
///
/// `RUST_LOG` takes precedence over [`DEFAULT_TEST_FILTER`].
pub fn init_tracing_from_env() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
