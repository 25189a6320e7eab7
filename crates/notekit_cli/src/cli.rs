//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// notekit - Flutter notes app skeleton generator
#[derive(Parser)]
#[command(name = "notekit")]
#[command(version, about = "Generate the lib/ skeleton for a Flutter notes app")]
#[command(long_about = r#"
notekit materializes a fixed project skeleton: the lib/ directory tree of a
Flutter note-taking app, with one empty placeholder .dart file per planned
source file. Contents are filled in later by other tooling.

Re-running is safe: missing entries are recreated. By default an existing
placeholder is truncated back to empty; pass --skip-existing to leave
existing files untouched.

EXIT CODES:
  0 - Success
  1 - Filesystem error (directory or file creation failed)
  2 - Invalid arguments
"#)]
pub struct Cli {
    /// Root directory to scaffold into (defaults to the current directory)
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Leave existing placeholder files untouched instead of truncating them
    #[arg(long)]
    pub skip_existing: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
