//! Located filesystem entries handed to the resolver.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Coarse classification of an entry.
///
/// Derived lexically from the path, never from a filesystem stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    File,
    Folder,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved filesystem path plus its derived classification.
///
/// Immutable once built: fields are private and every action captures its
/// own clone, so a list of actions never observes later changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    full_path: PathBuf,
    kind: EntryKind,
}

impl Entry {
    pub fn new(full_path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            full_path: full_path.into(),
            kind,
        }
    }

    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_path.display(), self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_accessors() {
        let entry = Entry::new("/tmp/app.exe", EntryKind::File);
        assert_eq!(entry.full_path(), Path::new("/tmp/app.exe"));
        assert!(entry.is_file());
        assert!(!entry.is_folder());
    }

    #[test]
    fn test_entry_display() {
        let entry = Entry::new("/srv/project", EntryKind::Folder);
        assert_eq!(entry.to_string(), "/srv/project (folder)");
    }

    #[test]
    fn test_entry_serde_shape() {
        let entry = Entry::new("/tmp/pom.xml", EntryKind::File);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["full_path"], "/tmp/pom.xml");
        assert_eq!(json["kind"], "File");
    }
}
