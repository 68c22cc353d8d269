//! Tracing/logging setup shared by test harnesses and caller-side wrappers.
//!
//! The engine itself only emits through `tracing` macros; wiring a
//! subscriber is the process's job, and this is the one place that does it.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing/logging.
///
/// JSON output, filter taken from `RUST_LOG` (defaulting to `info`). Safe
/// to call multiple times; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}
