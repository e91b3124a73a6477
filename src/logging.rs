use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Filter used when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber
///
/// Stdout carries the report, so logs always go to stderr and never use
/// ANSI colors. Call once, from the entry point.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("def_rewrite=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    fmt::Subscriber::builder()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(true)
        .without_time()
        .init();
}
