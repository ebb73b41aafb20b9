//! Structured stderr logging for host binaries and tests.
//!
//! The library itself only emits `tracing` events; this module gives an
//! embedding binary (or a test) a one-call subscriber setup with env-filter
//! support.
//!
//! # Usage
//!
//! ```rust,ignore
//! parallax_backgrounds::logging::init();
//! tracing::info!(panel = "wps_parallax", "customizer registered");
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize a human-readable stderr subscriber.
///
/// Filtering honors `RUST_LOG` and defaults to `info`. Safe to call more
/// than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
