//! Integration tests for the scaffolding engine.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use notekit_core::{ExistingFileMode, Progress, ProjectSpec, Scaffolder};

#[derive(Default)]
struct Recorder {
    created: Vec<PathBuf>,
    skipped: Vec<PathBuf>,
}

impl Progress for Recorder {
    fn file_created(&mut self, path: &Path) {
        self.created.push(path.to_path_buf());
    }

    fn file_skipped(&mut self, path: &Path) {
        self.skipped.push(path.to_path_buf());
    }
}

/// Test a full run against an empty root: exact tree, all files empty.
#[test]
fn test_full_skeleton_materialization() {
    let temp = tempdir().unwrap();
    let spec = ProjectSpec::flutter_notes();

    let mut progress = Recorder::default();
    let report = Scaffolder::new(temp.path())
        .run(&spec, &mut progress)
        .unwrap();

    assert_eq!(report.directories.len(), 6);
    assert_eq!(report.files.len(), 10);
    assert_eq!(progress.created.len(), spec.file_count());

    let expected = [
        "lib/main.dart",
        "lib/database/database_helper.dart",
        "lib/models/note.dart",
        "lib/screens/home_screen.dart",
        "lib/screens/note_detail_screen.dart",
        "lib/screens/search_screen.dart",
        "lib/widgets/note_card.dart",
        "lib/widgets/color_picker_dialog.dart",
        "lib/widgets/empty_state.dart",
        "lib/utils/constants.dart",
    ];
    for rel in expected {
        let path = temp.path().join(rel);
        let meta = fs::metadata(&path)
            .unwrap_or_else(|_| panic!("Missing placeholder: {}", rel));
        assert!(meta.is_file(), "Not a regular file: {}", rel);
        assert_eq!(meta.len(), 0, "Placeholder not empty: {}", rel);
    }
}

/// Test creation order matches the declared table order.
#[test]
fn test_creation_order_matches_table() {
    let temp = tempdir().unwrap();
    let spec = ProjectSpec::flutter_notes();

    let mut progress = Recorder::default();
    Scaffolder::new(temp.path())
        .run(&spec, &mut progress)
        .unwrap();

    assert_eq!(progress.created, spec.relative_paths());
}

/// Test rerunning heals nothing-to-heal and truncates prior content.
#[test]
fn test_rerun_is_idempotent_and_truncates() {
    let temp = tempdir().unwrap();
    let spec = ProjectSpec::flutter_notes();
    let scaffolder = Scaffolder::new(temp.path());

    scaffolder.run(&spec, &mut Recorder::default()).unwrap();

    // Seed content into one placeholder between runs.
    let note = temp.path().join("lib").join("models").join("note.dart");
    fs::write(&note, "class Note {}").unwrap();

    let report = scaffolder.run(&spec, &mut Recorder::default()).unwrap();

    assert_eq!(report.files.len(), 10);
    assert_eq!(fs::metadata(&note).unwrap().len(), 0);

    // Same final file set both times.
    for rel in spec.relative_paths() {
        assert!(temp.path().join(rel).is_file());
    }
}

/// Test skip mode leaves pre-existing placeholders intact.
#[test]
fn test_skip_mode_round_trip() {
    let temp = tempdir().unwrap();
    let spec = ProjectSpec::flutter_notes();

    Scaffolder::new(temp.path())
        .run(&spec, &mut Recorder::default())
        .unwrap();

    let constants = temp.path().join("lib").join("utils").join("constants.dart");
    fs::write(&constants, "const kAppName = 'notes';").unwrap();

    let mut progress = Recorder::default();
    let report = Scaffolder::new(temp.path())
        .with_mode(ExistingFileMode::Skip)
        .run(&spec, &mut progress)
        .unwrap();

    assert!(report.files.is_empty());
    assert_eq!(report.skipped.len(), 10);
    assert_eq!(progress.skipped.len(), 10);
    assert_eq!(
        fs::read_to_string(&constants).unwrap(),
        "const kAppName = 'notes';"
    );
}

/// Test a read-only root aborts the run with the offending path reported.
#[cfg(unix)]
#[test]
fn test_read_only_root_fails() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir().unwrap();
    fs::set_permissions(temp.path(), fs::Permissions::from_mode(0o555)).unwrap();

    // Permission bits do not bind root; nothing to assert in that case.
    if fs::File::create(temp.path().join("probe")).is_ok() {
        fs::set_permissions(temp.path(), fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let spec = ProjectSpec::flutter_notes();
    let mut progress = Recorder::default();
    let result = Scaffolder::new(temp.path()).run(&spec, &mut progress);

    // Restore so tempdir cleanup succeeds.
    fs::set_permissions(temp.path(), fs::Permissions::from_mode(0o755)).unwrap();

    let err = result.unwrap_err();
    assert!(err.to_string().contains("lib"), "unexpected error: {err}");
    assert!(progress.created.is_empty());
}
