//! Data directory provisioning at application start.
//!
//! Before the node runtime opens anything, the app shell makes sure
//! `<storage root>/.obol` exists. Creation failure is deliberately not
//! surfaced, logged, or retried: startup proceeds, and an unusable data
//! directory is diagnosed by the node runtime when it opens files there.

use std::fs;
use std::path::Path;

use crate::paths;

/// Ensures the node data directory exists under `storage_root`.
///
/// Creates exactly one directory level; the storage root itself is the
/// platform's to provide. Present already (or created concurrently by
/// someone else) is fine. Fire-and-forget: returns whether or not the
/// directory could be created.
pub fn ensure_data_dir_in(storage_root: &Path) {
    let dir = paths::data_dir_in(storage_root);
    if !dir.exists() {
        let _ = fs::create_dir(&dir);
    }
}

/// Ensures the node data directory under the platform storage root.
/// An undeterminable root is treated like any other provisioning failure:
/// silent, and the runtime reports it later through its own error path.
pub fn ensure_data_dir() {
    if let Some(root) = paths::storage_root() {
        ensure_data_dir_in(&root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::data_dir_in;

    #[test]
    fn creates_data_dir_when_absent() {
        let root = tempfile::tempdir().unwrap();
        ensure_data_dir_in(root.path());
        assert!(data_dir_in(root.path()).is_dir());
    }

    #[test]
    fn leaves_existing_data_dir_alone() {
        let root = tempfile::tempdir().unwrap();
        let dir = data_dir_in(root.path());
        fs::create_dir(&dir).unwrap();
        let marker = dir.join("wallet.dat");
        fs::write(&marker, b"state").unwrap();

        ensure_data_dir_in(root.path());

        assert!(dir.is_dir());
        assert_eq!(fs::read(&marker).unwrap(), b"state");
    }

    #[test]
    fn double_invocation_is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        ensure_data_dir_in(root.path());
        ensure_data_dir_in(root.path());
        assert!(data_dir_in(root.path()).is_dir());
    }

    #[test]
    fn creation_failure_is_swallowed() {
        // A plain file where the root should be: creation below it can
        // only fail, regardless of who runs the tests.
        let scratch = tempfile::tempdir().unwrap();
        let bogus_root = scratch.path().join("not-a-dir");
        fs::write(&bogus_root, b"").unwrap();

        ensure_data_dir_in(&bogus_root);

        assert!(!data_dir_in(&bogus_root).exists());
    }
}
