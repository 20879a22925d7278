//! Entry into the embedded node runtime.
//!
//! The runtime is not handed the data directory: it resolves the path itself
//! with the same fixed rule the shell used to provision it (storage root plus
//! [obol_core::DATA_DIR_NAME]). By the time this runs the directory is in
//! place, best effort; anything wrong with it surfaces here, through the
//! runtime's own reporting, not at provisioning time.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use obol_core::config;
use obol_core::paths;

/// Starts the embedded node. Runs synchronously on the startup thread, after
/// provisioning has completed.
pub fn run() {
    let Some(root) = paths::storage_root() else {
        tracing::error!("no platform storage root, node cannot start");
        return;
    };
    let data_dir = paths::data_dir_in(&root);
    let config = config::load_config_in(&data_dir);
    tracing::info!(
        network = config.network(),
        data_dir = %data_dir.display(),
        "starting embedded node"
    );

    if let Err(e) = open_runtime_log(&data_dir, config.network()) {
        tracing::error!("data directory {} is unusable: {}", data_dir.display(), e);
        return;
    }

    // The chain and wallet engines attach here.
    tracing::info!("node runtime initialized");
}

/// The node's append-only log inside the data directory. Opening it is the
/// first file access in there, so a missing or read-only directory shows up
/// here first.
fn open_runtime_log(data_dir: &Path, network: &str) -> io::Result<()> {
    let mut log = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("debug.log"))?;
    writeln!(log, "node started (network: {})", network)
}
