//! Eligibility rules: pure predicates gating which actions appear.

use pathmenu_api::Entry;

use crate::classifier::{extension_of, has_marker_file};
use crate::probe::MarkerProbe;

/// Extensions that can be launched elevated. Extend this list to add a type.
pub const ELEVATABLE_EXTENSIONS: &[&str] = &[".exe", ".bat", ".appref-ms", ".lnk"];

/// Marker files that make a folder look like a buildable project, in probe order.
pub const PROJECT_MARKERS: &[&str] = &["build.gradle", "pom.xml"];

const POM_FILE: &str = "pom.xml";

/// True for files whose extension is in [`ELEVATABLE_EXTENSIONS`].
pub fn can_elevate(entry: &Entry) -> bool {
    if !entry.is_file() {
        return false;
    }
    let ext = extension_of(entry.full_path());
    ELEVATABLE_EXTENSIONS
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(&ext))
}

/// Heuristic check for something an IDE can open as a project.
///
/// A file qualifies when its path ends with `pom.xml`; a folder when it
/// directly contains one of [`PROJECT_MARKERS`]. False positives are fine.
pub fn is_buildable_project(entry: &Entry, probe: &dyn MarkerProbe) -> bool {
    if entry.is_file() {
        return entry.full_path().to_string_lossy().ends_with(POM_FILE);
    }
    PROJECT_MARKERS
        .iter()
        .any(|marker| has_marker_file(probe, entry.full_path(), marker))
}

/// Only files have a parent folder worth revealing.
pub fn has_containing_folder(entry: &Entry) -> bool {
    entry.is_file()
}
