//! Lexical entry classification.
//!
//! Paths coming from a search index may be remote or synthetic, so nothing
//! here touches the filesystem except `has_marker_file`. A directory whose
//! name contains a dot (`v1.2`) is classified as a file; eligibility rules
//! are written against this heuristic, so keep it.

use std::path::Path;

use pathmenu_api::{Entry, EntryKind};

use crate::probe::MarkerProbe;

/// Classify `path` as a file or folder by looking at its final segment.
pub fn classify(path: impl AsRef<Path>) -> Entry {
    let path = path.as_ref();
    let kind = if has_extension(&path.to_string_lossy()) {
        EntryKind::File
    } else {
        EntryKind::Folder
    };
    Entry::new(path, kind)
}

/// Lowercased extension of the final segment, including the leading dot.
///
/// Returns an empty string when there is none.
pub fn extension_of(path: impl AsRef<Path>) -> String {
    let text = path.as_ref().to_string_lossy();
    let segment = final_segment(&text);
    match segment.rfind('.') {
        Some(dot) if dot + 1 < segment.len() => segment[dot..].to_lowercase(),
        _ => String::new(),
    }
}

/// True when `dir` directly contains a regular file called `filename`.
pub fn has_marker_file(probe: &dyn MarkerProbe, dir: &Path, filename: &str) -> bool {
    probe.is_file(&dir.join(filename))
}

fn has_extension(path: &str) -> bool {
    let segment = final_segment(path);
    matches!(segment.rfind('.'), Some(dot) if dot + 1 < segment.len())
}

// Index results may use either separator regardless of the host OS.
fn final_segment(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::RealProbe;

    #[test]
    fn test_dotted_final_segment_is_file() {
        assert_eq!(classify("/home/me/notes.txt").kind(), EntryKind::File);
        assert_eq!(classify(r"C:\Tools\setup.EXE").kind(), EntryKind::File);
        assert_eq!(classify("/home/me/.bashrc").kind(), EntryKind::File);
    }

    #[test]
    fn test_plain_final_segment_is_folder() {
        assert_eq!(classify("/home/me/projects").kind(), EntryKind::Folder);
        assert_eq!(classify(r"C:\Users\me\Desktop").kind(), EntryKind::Folder);
        assert_eq!(classify("/home/me/projects/").kind(), EntryKind::Folder);
    }

    #[test]
    fn test_dot_only_in_parent_is_folder() {
        assert_eq!(classify("/opt/app.d/bin").kind(), EntryKind::Folder);
    }

    #[test]
    fn test_trailing_dot_is_not_an_extension() {
        assert_eq!(classify("/tmp/weird.").kind(), EntryKind::Folder);
        assert_eq!(extension_of("/tmp/weird."), "");
    }

    #[test]
    fn test_dotted_directory_is_misclassified_as_file() {
        let dir = tempfile::tempdir().unwrap();
        let dotted = dir.path().join("v1.2");
        std::fs::create_dir(&dotted).unwrap();
        assert_eq!(classify(&dotted).kind(), EntryKind::File);
    }

    #[test]
    fn test_extension_of_lowercases() {
        assert_eq!(extension_of(r"C:\Apps\Tool.EXE"), ".exe");
        assert_eq!(extension_of("/tmp/app.appref-ms"), ".appref-ms");
        assert_eq!(extension_of("/tmp/archive.tar.gz"), ".gz");
        assert_eq!(extension_of("/tmp/Makefile"), "");
    }

    #[test]
    fn test_has_marker_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("build.gradle"), "").unwrap();

        assert!(has_marker_file(&RealProbe, dir.path(), "build.gradle"));
        assert!(!has_marker_file(&RealProbe, dir.path(), "pom.xml"));
    }

    #[test]
    fn test_has_marker_file_missing_dir_is_false() {
        let missing = Path::new("/definitely/not/here");
        assert!(!has_marker_file(&RealProbe, missing, "pom.xml"));
    }
}
