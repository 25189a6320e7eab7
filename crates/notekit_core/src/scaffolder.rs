//! Skeleton materialization.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::spec::ProjectSpec;

/// How to treat a placeholder file that already exists on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExistingFileMode {
    /// Recreate the file, discarding any prior content.
    #[default]
    Truncate,
    /// Leave the existing file untouched.
    Skip,
}

/// Sink for per-file progress notifications.
///
/// Paths are relative to the scaffold root, in creation order. Notifications
/// are emitted as each file lands, so anything reported before a failure has
/// already reached the sink.
pub trait Progress {
    fn file_created(&mut self, path: &Path);

    fn file_skipped(&mut self, path: &Path) {
        let _ = path;
    }
}

/// Outcome of a successful scaffolding run.
///
/// Paths here are joined onto the scaffold root.
#[derive(Debug, Default)]
pub struct Report {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Materializes a [`ProjectSpec`] under a root directory.
///
/// The run is a straight two-level pass: ensure each directory exists, create
/// each listed file empty. The first filesystem error aborts the run with no
/// rollback of entries already created; re-running heals missing entries.
pub struct Scaffolder {
    root: PathBuf,
    mode: ExistingFileMode,
}

impl Scaffolder {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            mode: ExistingFileMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ExistingFileMode) -> Self {
        self.mode = mode;
        self
    }

    /// Get the scaffold root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create every directory and placeholder file the spec lists, in order.
    pub fn run(&self, spec: &ProjectSpec, progress: &mut dyn Progress) -> ScaffoldResult<Report> {
        spec.validate()?;

        info!("Scaffolding project skeleton at {:?}", self.root);

        let mut report = Report::default();

        for entry in spec.entries() {
            let dir = self.root.join(entry.dir);
            // Already-existing directories are fine; intermediates are created.
            fs::create_dir_all(&dir).map_err(|source| ScaffoldError::CreateDir {
                path: dir.clone(),
                source,
            })?;
            report.directories.push(dir);

            for stem in entry.files {
                let relative = Path::new(entry.dir).join(spec.file_name(stem));
                let path = self.root.join(&relative);

                if self.mode == ExistingFileMode::Skip && path.exists() {
                    debug!("Skipped existing placeholder {:?}", relative);
                    progress.file_skipped(&relative);
                    report.skipped.push(path);
                    continue;
                }

                // Create empty; truncates any prior content.
                fs::File::create(&path).map_err(|source| ScaffoldError::CreateFile {
                    path: path.clone(),
                    source,
                })?;
                debug!("Created placeholder {:?}", relative);
                progress.file_created(&relative);
                report.files.push(path);
            }
        }

        debug!(
            "Skeleton complete: {} files across {} directories",
            report.files.len(),
            report.directories.len()
        );
        Ok(report)
    }
}
