//! Filesystem probing used by eligibility rules.

use std::path::Path;

/// Answers "is there a regular file here?" without ever failing.
///
/// Unreadable locations, broken links and permission errors all read as
/// `false`; classification never surfaces an error.
pub trait MarkerProbe: Send + Sync {
    fn is_file(&self, path: &Path) -> bool;
}

/// Probe backed by `std::fs::metadata`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealProbe;

impl MarkerProbe for RealProbe {
    fn is_file(&self, path: &Path) -> bool {
        std::fs::metadata(path)
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }
}
