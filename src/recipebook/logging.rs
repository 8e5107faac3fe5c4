//! Log output for the binary.
//!
//! The library only emits `tracing` events. Failures of `load` and `delete` are
//! reported exclusively through this channel, so the subscriber writes to stderr at
//! `warn` and above by default. `RECIPEBOOK_LOG` takes any `EnvFilter` directive
//! (e.g. `recipebook=debug`).

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "RECIPEBOOK_LOG";

pub fn init(verbose: bool) {
    let fallback = if verbose { "recipebook=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
