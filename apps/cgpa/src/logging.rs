//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "cgpa=info,tower_http=info";

/// Default filter with `--verbose`.
const VERBOSE_FILTER: &str = "cgpa=debug,cgpa_core=debug,tower_http=debug";

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `verbose`. Logs go to stderr so they
/// never interleave with console prompts or `calculate` output on stdout.
pub fn init_logging(verbose: bool) {
    let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
