//! Process setup shared by the binary.

use tracing_subscriber::EnvFilter;

/// Directives layered on top of `RUST_LOG`. Raise this crate's level with
/// `RUST_LOG=pagescan=debug`.
const DEFAULT_DIRECTIVES: [&str; 3] = ["reqwest=warn", "hyper=warn", "info"];

/// Filter built from `RUST_LOG` plus the default directives.
pub fn log_filter() -> EnvFilter {
    DEFAULT_DIRECTIVES
        .iter()
        .fold(EnvFilter::from_default_env(), |filter, directive| {
            filter.add_directive(directive.parse().expect("default log directive is valid"))
        })
}

/// Initialize logging with tracing_subscriber.
///
/// Logs go to stderr so the report on stdout stays clean.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .compact()
        .with_target(false)
        .init();
}
