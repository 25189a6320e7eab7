//! # notekit_core
//!
//! Scaffolding engine for the notekit skeleton generator.
//!
//! This crate holds the static project layout table and the engine that
//! materializes it: every directory in the table is created (intermediates
//! included) and every listed placeholder file is created empty, in
//! declaration order, with per-file progress reported through the
//! [`Progress`] trait.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use notekit_core::{Progress, ProjectSpec, Scaffolder};
//!
//! struct Printing;
//!
//! impl Progress for Printing {
//!     fn file_created(&mut self, path: &Path) {
//!         println!("Created: {}", path.display());
//!     }
//! }
//!
//! let spec = ProjectSpec::flutter_notes();
//! let report = Scaffolder::new(".").run(&spec, &mut Printing).unwrap();
//! assert_eq!(report.files.len(), spec.file_count());
//! ```

pub mod error;
pub mod scaffolder;
pub mod spec;

pub use error::{ScaffoldError, ScaffoldResult};
pub use scaffolder::{ExistingFileMode, Progress, Report, Scaffolder};
pub use spec::{ProjectSpec, SpecEntry};
