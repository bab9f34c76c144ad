//! Logging setup for the command-line front end
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=keysig::renderer=debug` - module-level filtering
//!
//! Output goes to stderr so stdout stays clean for SVG and path output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the tracing subscriber, defaulting to `warn`
///
/// `verbose` raises the default to `debug` when RUST_LOG is unset.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
