//! Scaffold execution and console progress reporting.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use notekit_core::{ExistingFileMode, Progress, ProjectSpec, Scaffolder};

use crate::cli::Cli;

/// Progress sink that mirrors each file to the console as it lands.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn file_created(&mut self, path: &Path) {
        println!("Created: {}", path.display());
    }

    fn file_skipped(&mut self, path: &Path) {
        println!("Skipped: {}", path.display());
    }
}

pub fn execute(args: &Cli) -> Result<()> {
    let spec = ProjectSpec::flutter_notes();
    let mode = if args.skip_existing {
        ExistingFileMode::Skip
    } else {
        ExistingFileMode::Truncate
    };

    info!("Scaffolding {} files into {:?}", spec.file_count(), args.root);

    let scaffolder = Scaffolder::new(&args.root).with_mode(mode);
    let report = scaffolder
        .run(&spec, &mut ConsoleProgress)
        .context("Failed to create project structure")?;

    println!();
    println!("✅ Project structure created successfully!");

    info!(
        "Done: {} created, {} skipped",
        report.files.len(),
        report.skipped.len()
    );

    Ok(())
}
