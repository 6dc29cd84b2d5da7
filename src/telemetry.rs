//! Diagnostic logging initialization.
//!
//! Controlled by the `GITLET_LOG` environment variable (falls back to
//! `warn`); `-v`/`--verbose` on the CLI raises the default to `debug`.
//! All output goes to stderr — stdout is reserved for the prescribed
//! user-facing command output.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `verbose` raises the default level (used when `GITLET_LOG` is unset)
/// from `warn` to `debug`. Safe to call at most once per process; a second
/// call is a no-op rather than a panic, so tests that spawn the CLI
/// in-process repeatedly don't need to guard it themselves.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("GITLET_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
