/*!
 * Structured Tracing
 * Diagnostic logging for the simulator using the tracing crate
 *
 * Logs always go to stderr; stdout is reserved for the simulation report.
 */

use tracing::debug;
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that switches log output to JSON
pub const TRACE_JSON_ENV: &str = "MEMSIM_TRACE_JSON";

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: warn)
/// - MEMSIM_TRACE_JSON: Enable JSON output (default: false)
///
/// Calling this more than once is harmless: later calls leave the first
/// subscriber in place.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let use_json = std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
    };

    match result {
        Ok(()) => debug!(json = use_json, "Structured tracing initialized"),
        Err(e) => debug!(error = %e, "Tracing subscriber already installed"),
    }
}
