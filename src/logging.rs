//! Log output for test runs.
//!
//! The crate emits `tracing` events (diff reporting, mutability probes,
//! preliminary-test passes) but never installs a subscriber on its own.
//! Tests that want to see them call [`init_test_logging`] first.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "require=warn";

/// Install a subscriber that writes through the test harness.
///
/// Level is controlled by:
/// 1. `RUST_LOG` environment variable (if set)
/// 2. Default is `require=warn`
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Another test may have installed a subscriber already.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_test_writer()
        .try_init();
}
