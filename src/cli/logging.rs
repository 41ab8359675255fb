//! Console logging setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log directive for the given `-v` count and `-q` flag.
///
/// Only this crate is raised above `warn`; dependencies stay quiet.
pub fn default_directive(verbose: u8, quiet: bool) -> String {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    format!("warn,plankacli={}", level)
}

/// Initialize tracing subscriber with env filter
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn init_tracing(verbose: u8, quiet: bool) {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(verbose, quiet).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
