//! Tracing setup
//!
//! Log output goes to stderr so command output on stdout stays machine-readable.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Default filter directive when `RUST_LOG` is unset
pub const DEFAULT_DIRECTIVE: &str = "paycycle=warn";

/// Directive used when the caller asks for verbose output
pub const VERBOSE_DIRECTIVE: &str = "paycycle=debug";

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` wins over `verbose`. Only the first call has any effect.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let fallback = if verbose {
            VERBOSE_DIRECTIVE
        } else {
            DEFAULT_DIRECTIVE
        };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

        // A subscriber may already be installed by an embedding application.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();

        tracing::debug!("tracing initialized");
    });
}
