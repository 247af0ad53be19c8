//! Tracing output for tests.
//!
//! Safe to call from every test; the subscriber is installed once.
//!
//! ```ignore
//! #[test]
//! fn test_example() {
//!     rrh_common::testing::init_test_logging();
//!     tracing::info!("captured by the test writer");
//! }
//! ```

use std::sync::Once;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

static TEST_LOGGING_INIT: Once = Once::new();

/// Install a compact subscriber writing through the libtest capture.
///
/// `RRH_TEST_LOG_LEVEL` sets the level for the rrh crates (default: `debug`).
pub fn init_test_logging() {
    TEST_LOGGING_INIT.call_once(|| {
        let level = std::env::var("RRH_TEST_LOG_LEVEL").unwrap_or_else(|_| "debug".to_string());
        let filter = EnvFilter::try_new(format!("rrh={level},rrh_common={level},test={level}"))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_level(true)
            .compact();

        let subscriber = tracing_subscriber::registry().with(filter).with(layer);
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
