//! Materialize the QA documentation skeleton on disk.
//!
//! Two ordered phases: every directory in [`DIRECTORIES`] is created, then
//! every file in [`FILES`] is written. The first filesystem error aborts the
//! run. Nothing is retried or rolled back, so a failed run can leave a
//! partial tree; running again brings it back to the full layout.
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use sqa_scaffold::clock::FixedClock;
//! use sqa_scaffold::config::ScaffoldConfig;
//! use sqa_scaffold::scaffold::ProjectScaffolder;
//!
//! let config = ScaffoldConfig::new("qa-project")
//!     .with_clock(FixedClock(NaiveDate::from_ymd_opt(2025, 3, 25).unwrap()));
//! let report = ProjectScaffolder::new(config).run()?;
//! println!("{} files written", report.files.len());
//! # Ok::<(), sqa_scaffold::error::FilesystemError>(())
//! ```
//!
//! [`DIRECTORIES`]: crate::paths::DIRECTORIES
//! [`FILES`]: crate::manifest::FILES

mod internal;

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::ScaffoldConfig;
use crate::error::FilesystemError;
use crate::manifest::FileEntry;

/// Outcome of a successful scaffold run.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    /// Date stamped into templated content
    pub date: String,
    pub directories: Vec<PathBuf>,
    pub files: Vec<WrittenFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Create each relative directory chain under `root`.
///
/// Existing directories are left alone, including whatever they contain.
/// Fails on the first path that cannot be created, such as one blocked by
/// a regular file.
pub fn ensure_directories(root: &Path, specs: &[&str]) -> Result<Vec<PathBuf>, FilesystemError> {
    internal::ensure_directories(root, specs)
}

/// Write each entry to `root/<path>`, truncating any previous content.
///
/// `date` is the already-rendered `YYYY-MM-DD` value used by dated entries.
/// Parent directories are NOT created here; run [`ensure_directories`] first.
pub fn write_files(
    root: &Path,
    entries: &[FileEntry],
    date: &str,
) -> Result<Vec<WrittenFile>, FilesystemError> {
    internal::write_files(root, entries, date)
}

/// Scaffolder bound to one configuration.
#[derive(Debug)]
pub struct ProjectScaffolder {
    config: ScaffoldConfig,
}

impl ProjectScaffolder {
    pub fn new(config: ScaffoldConfig) -> Self {
        Self { config }
    }

    pub fn root(&self) -> &Path {
        &self.config.root_path
    }

    /// Run both phases against the configured root.
    ///
    /// The date is read from the clock once, so every dated row of a run
    /// carries the same value.
    pub fn run(&self) -> Result<ScaffoldReport, FilesystemError> {
        internal::run(&self.config)
    }
}
