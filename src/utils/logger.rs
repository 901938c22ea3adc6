use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Compact logger for one-shot commands and the dev server.
///
/// Verbose mode also turns on `tower_http` request spans and shows the
/// emitting module, which is handy when poking at the demo routes.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli_filter_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(verbose)
                .without_time()
                .compact(),
        )
        .init();
}

fn cli_filter_directives(verbose: bool) -> &'static str {
    if verbose {
        "demo_kit=debug,tower_http=debug,warn"
    } else {
        "demo_kit=info,warn"
    }
}

pub fn init_json_logger(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("demo_kit={},tower_http={}", level, level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // server logs go to a collector, keep them machine-readable
        )
        .init();
}
