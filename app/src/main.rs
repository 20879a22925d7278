//! Obol app shell.
//!
//! Stands where the platform lifecycle entry point would on a phone build:
//! provision the node data directory, then hand control to the embedded
//! node runtime.

mod runtime;

use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    init_tracing();
    obol_core::startup::launch(runtime::run);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();
}
