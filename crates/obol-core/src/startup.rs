//! Two-phase application startup.
//!
//! Phase one provisions the node data directory; phase two hands control to
//! the rest of the process (on a phone build, the platform lifecycle; here,
//! the embedded node runtime entry). The phases run in order, synchronously,
//! on the calling thread, so the runtime never starts before provisioning
//! has finished.

use std::path::Path;

use crate::provision;

/// Runs the full startup sequence: provision resources, then hand off to
/// `runtime_main`. Provisioning is fire-and-forget, so the handoff happens
/// whether or not the data directory could be created.
pub fn launch<F: FnOnce()>(runtime_main: F) {
    provision_resources();
    continue_platform_initialization(runtime_main);
}

/// Same sequence against an explicit storage root, for callers that own the
/// root instead of the platform (embedders, test harnesses).
pub fn launch_from<F: FnOnce()>(storage_root: &Path, runtime_main: F) {
    provision::ensure_data_dir_in(storage_root);
    continue_platform_initialization(runtime_main);
}

fn provision_resources() {
    provision::ensure_data_dir();
}

fn continue_platform_initialization<F: FnOnce()>(runtime_main: F) {
    runtime_main();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::data_dir_in;
    use std::cell::Cell;
    use std::fs;

    #[test]
    fn runtime_hook_sees_data_dir_already_present() {
        let root = tempfile::tempdir().unwrap();
        let observed = Cell::new(false);

        launch_from(root.path(), || {
            observed.set(data_dir_in(root.path()).is_dir());
        });

        assert!(observed.get());
    }

    #[test]
    fn handoff_happens_even_when_provisioning_fails() {
        let scratch = tempfile::tempdir().unwrap();
        let bogus_root = scratch.path().join("not-a-dir");
        fs::write(&bogus_root, b"").unwrap();
        let ran = Cell::new(false);

        launch_from(&bogus_root, || ran.set(true));

        assert!(ran.get());
        assert!(!data_dir_in(&bogus_root).exists());
    }
}
