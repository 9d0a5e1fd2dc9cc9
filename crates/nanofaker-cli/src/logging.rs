use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

/// Install the stderr subscriber. `RUST_LOG` wins over `verbose`; JSON lines
/// carry RFC 3339 UTC timestamps.
pub fn init_logging(verbose: bool, json: bool) -> Result<(), String> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if json {
        registry
            .with(layer.json().with_timer(UtcTime::rfc_3339()))
            .try_init()
    } else {
        registry.with(layer.without_time()).try_init()
    };
    installed.map_err(|err| err.to_string())
}
