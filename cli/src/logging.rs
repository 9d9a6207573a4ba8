use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const TARGETS: [&str; 2] = ["graph_paths", "graph_paths_core"];

/// Initialize structured logging to stderr.
///
/// Precedence: `RUST_LOG`, then `GRAPH_PATHS_LOG`, then `--log-level`,
/// then `--verbose` (debug) or the default (warn).
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let directive = match (verbose, log_level) {
        (_, Some(level)) => filter_directive(level),
        (true, None) => filter_directive("debug"),
        (false, None) => filter_directive("warn"),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("GRAPH_PATHS_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(directive));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// Expand a bare level into per-crate directives. Full directives
/// (containing `=`) pass through untouched.
fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        return level.to_string();
    }
    TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}
