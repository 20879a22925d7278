//! Where the embedded node keeps its chain and wallet state.
//!
//! The platform assigns each install a private storage root; the node's data
//! directory is a single fixed subdirectory of it.

use std::path::{Path, PathBuf};

/// Name of the node data directory under the storage root.
///
/// There is no handoff of this path at startup: the app shell provisions it
/// and the node runtime resolves it again on its own. Both sides must derive
/// it from this constant, or they silently diverge.
pub const DATA_DIR_NAME: &str = ".obol";

/// Returns the platform-assigned private storage root for this install.
/// On macOS: `~/Library/Application Support/Obol/`.
/// Creates the root if it doesn't exist; returns `None` if we can't determine the path.
pub fn storage_root() -> Option<PathBuf> {
    let dir = directories::ProjectDirs::from("app", "Obol", "Obol")?.data_local_dir().to_path_buf();
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// The node data directory under `storage_root`: one level down, nothing else.
pub fn data_dir_in(storage_root: &Path) -> PathBuf {
    storage_root.join(DATA_DIR_NAME)
}

/// The node data directory under the platform storage root.
pub fn data_dir() -> Option<PathBuf> {
    Some(data_dir_in(&storage_root()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_root_is_some() {
        assert!(storage_root().is_some());
    }

    #[test]
    fn data_dir_is_one_level_below_root() {
        assert_eq!(
            data_dir_in(Path::new("/data/user/0/app.obol/files")),
            PathBuf::from("/data/user/0/app.obol/files/.obol")
        );
    }

    #[test]
    fn data_dir_derivation_is_a_plain_join() {
        let root = Path::new("some/relative/root");
        assert_eq!(data_dir_in(root), root.join(DATA_DIR_NAME));
    }
}
