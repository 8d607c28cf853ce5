//! Logger for tests.
//!
//! Provides a convenience logger for unit and integration tests. Output goes through the test harness so it is only
//! shown for failing tests, and the level is taken from `RUST_LOG`.

use once_cell::sync::Lazy;

/// Installs the global subscriber the first time it is dereferenced.
pub static LOGGER_INIT: Lazy<()> = Lazy::new(logger_init);

/// Initializes logging. Can be called any number of times from any number of tests.
pub fn init() {
    Lazy::force(&LOGGER_INIT);
}

fn logger_init() {
    #[cfg(feature = "tracing")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        // The test binary may have installed its own subscriber already.
        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
    }
}
