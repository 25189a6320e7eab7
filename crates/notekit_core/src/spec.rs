//! The static project layout table.

use std::path::PathBuf;

use crate::error::{ScaffoldError, ScaffoldResult};

/// One (directory, file stems) pair in the layout table.
#[derive(Debug, Clone, Copy)]
pub struct SpecEntry {
    /// Directory path relative to the scaffold root.
    pub dir: &'static str,
    /// File stems to create inside the directory, in order.
    pub files: &'static [&'static str],
}

/// The `lib/` skeleton of a Flutter note-taking app.
const FLUTTER_NOTES: &[SpecEntry] = &[
    SpecEntry {
        dir: "lib",
        files: &["main"],
    },
    SpecEntry {
        dir: "lib/database",
        files: &["database_helper"],
    },
    SpecEntry {
        dir: "lib/models",
        files: &["note"],
    },
    SpecEntry {
        dir: "lib/screens",
        files: &["home_screen", "note_detail_screen", "search_screen"],
    },
    SpecEntry {
        dir: "lib/widgets",
        files: &["note_card", "color_picker_dialog", "empty_state"],
    },
    SpecEntry {
        dir: "lib/utils",
        files: &["constants"],
    },
];

/// An ordered mapping from directory path to placeholder file stems.
///
/// Built once at launch, read once, never mutated. The table is a
/// compile-time constant; it is not loaded from any external input.
#[derive(Debug, Clone)]
pub struct ProjectSpec {
    entries: &'static [SpecEntry],
}

impl ProjectSpec {
    /// Extension appended to every placeholder file stem.
    pub const PLACEHOLDER_EXT: &'static str = "dart";

    /// The layout for a Flutter notes application.
    pub fn flutter_notes() -> Self {
        Self {
            entries: FLUTTER_NOTES,
        }
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[SpecEntry] {
        self.entries
    }

    /// Number of directories in the layout.
    pub fn dir_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of placeholder files across all directories.
    pub fn file_count(&self) -> usize {
        self.entries.iter().map(|e| e.files.len()).sum()
    }

    /// Full file name for a stem, using [`Self::PLACEHOLDER_EXT`].
    pub fn file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, Self::PLACEHOLDER_EXT)
    }

    /// All placeholder paths relative to the scaffold root, in creation order.
    pub fn relative_paths(&self) -> Vec<PathBuf> {
        self.entries
            .iter()
            .flat_map(|entry| {
                entry
                    .files
                    .iter()
                    .map(|stem| PathBuf::from(entry.dir).join(self.file_name(stem)))
            })
            .collect()
    }

    /// Check the simple-stem invariant: no stem may embed a path separator.
    pub fn validate(&self) -> ScaffoldResult<()> {
        for entry in self.entries {
            for stem in entry.files {
                if stem.contains('/') || stem.contains('\\') {
                    return Err(ScaffoldError::InvalidFileName(stem.to_string()));
                }
            }
        }
        Ok(())
    }
}
