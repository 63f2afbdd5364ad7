//! Console logging for the browser build.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Install the console subscriber.
///
/// May be called again if the root component remounts; the first
/// registration wins and later calls are no-ops.
pub fn init_logging() {
    let env_filter = EnvFilter::new("error,ui=debug");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false)
        .with_line_number(true)
        // Browsers have patchy ANSI support and no std::time.
        .with_ansi(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();

    tracing::debug!("console logging initialized");
}
