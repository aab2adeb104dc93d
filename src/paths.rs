//! Single source of truth for the generated project layout.
//!
//! This module defines WHERE things land. It has no I/O, no validation,
//! no content. One file shows the entire directory skeleton.
//!
//! ```text
//! sqa_manual_testing_project/
//! ├── docs/
//! │   ├── test_plan/
//! │   ├── requirements/
//! │   └── traceability/
//! ├── test_artifacts/
//! │   ├── test_cases/
//! │   ├── test_data/
//! │   ├── execution_logs/
//! │   └── defect_reports/
//! ├── reports/
//! ├── environments/
//! ├── templates/
//! ├── tools/
//! └── README.md
//! ```

use std::path::{Path, PathBuf};

/// Root directory used when nothing else is configured.
pub const DEFAULT_ROOT: &str = "sqa_manual_testing_project";

/// `strftime` format for the date stamped into generated content.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Directories created under the root, in creation order.
pub const DIRECTORIES: &[&str] = &[
    "docs/test_plan",
    "docs/requirements",
    "docs/traceability",
    "test_artifacts/test_cases",
    "test_artifacts/test_data",
    "test_artifacts/execution_logs",
    "test_artifacts/defect_reports",
    "reports",
    "environments",
    "templates",
    "tools",
];

/// Join a `/`-separated relative path onto `root`.
///
/// Relative paths in the layout tables always use `/`, so they are split
/// here rather than joined as a single component.
///
/// # Example
///
/// ```
/// use std::path::{Path, PathBuf};
/// use sqa_scaffold::paths;
///
/// let root = Path::new("/tmp/qa");
/// assert_eq!(
///     paths::resolve(root, "docs/test_plan"),
///     PathBuf::from("/tmp/qa/docs/test_plan")
/// );
/// ```
pub fn resolve(root: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(root.to_path_buf(), |acc, segment| acc.join(segment))
}

/// Top-level directories of the skeleton (`docs`, `test_artifacts`, ...).
pub fn top_level_dirs() -> Vec<&'static str> {
    let mut tops: Vec<&'static str> = Vec::new();
    for dir in DIRECTORIES {
        let top = dir.split('/').next().unwrap_or(dir);
        if !tops.contains(&top) {
            tops.push(top);
        }
    }
    tops
}
