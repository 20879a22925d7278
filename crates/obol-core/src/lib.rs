//! Startup plumbing shared by the Obol app shell and the dev CLI.
//!
//! The embedded node (chain and wallet) keeps all persistent state in one
//! data directory under the platform storage root (see [paths]). The job
//! here is to have that directory in place before the node starts, and to
//! hold the little app-owned config that lives next to the node's files.

pub mod config;
pub mod paths;
pub mod provision;
pub mod startup;

pub use config::{load_config, set_network, Config, ConfigError, DEFAULT_NETWORK};
pub use paths::{data_dir, storage_root, DATA_DIR_NAME};
pub use provision::ensure_data_dir;
pub use startup::launch;

/// Returns a short status string. Used to verify the backend is wired up.
pub fn status() -> &'static str {
    "obol-core ready"
}
