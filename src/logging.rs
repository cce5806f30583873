//! Tracing setup
//!
//! Events go to stderr so that command output on stdout stays clean. The
//! filter comes from `FINSMART_LOG` (e.g. `FINSMART_LOG=finsmart=debug`);
//! without it only warnings are shown, or debug output with `--verbose`.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "FINSMART_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let default = if verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

        // A subscriber installed elsewhere (e.g. by a test harness) wins
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
