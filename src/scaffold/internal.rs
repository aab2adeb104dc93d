//! Internal implementation for the scaffold module

use std::fs;
use std::path::{Path, PathBuf};

use super::{ScaffoldReport, WrittenFile};
use crate::clock;
use crate::config::ScaffoldConfig;
use crate::error::{FilesystemError, FsOp};
use crate::log;
use crate::manifest::{FileEntry, FILES};
use crate::paths::{self, DIRECTORIES};

pub fn ensure_directories(root: &Path, specs: &[&str]) -> Result<Vec<PathBuf>, FilesystemError> {
    let mut created = Vec::with_capacity(specs.len());

    for spec in specs {
        let dir = paths::resolve(root, spec);
        log::debug("scaffold", format_args!("mkdir -p {}", dir.display()));

        // create_dir_all already tolerates an existing directory, but not a
        // file in its place
        fs::create_dir_all(&dir).map_err(|e| FilesystemError::new(FsOp::CreateDir, &dir, e))?;
        created.push(dir);
    }

    Ok(created)
}

pub fn write_files(
    root: &Path,
    entries: &[FileEntry],
    date: &str,
) -> Result<Vec<WrittenFile>, FilesystemError> {
    let mut written = Vec::with_capacity(entries.len());

    for entry in entries {
        let path = paths::resolve(root, entry.path);
        let content = entry.render(date);
        log::debug(
            "scaffold",
            format_args!("write {} ({} bytes)", path.display(), content.len()),
        );

        fs::write(&path, &content).map_err(|e| FilesystemError::new(FsOp::WriteFile, &path, e))?;
        written.push(WrittenFile {
            path,
            bytes: content.len(),
        });
    }

    Ok(written)
}

pub fn run(config: &ScaffoldConfig) -> Result<ScaffoldReport, FilesystemError> {
    let root = config.root_path.as_path();
    let date = clock::render_date(config.clock.as_ref());
    log::debug(
        "scaffold",
        format_args!("root={} date={}", root.display(), date),
    );

    let directories = ensure_directories(root, DIRECTORIES)?;
    let files = write_files(root, FILES, &date)?;

    Ok(ScaffoldReport {
        root: root.to_path_buf(),
        date,
        directories,
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use std::io;
    use tempfile::TempDir;

    fn fixed(y: i32, m: u32, d: u32) -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_ensure_directories_is_idempotent() -> anyhow::Result<()> {
        let temp = TempDir::new()?;
        let first = ensure_directories(temp.path(), &["a/b", "c"])?;
        let second = ensure_directories(temp.path(), &["a/b", "c"])?;
        assert_eq!(first, second);
        assert!(temp.path().join("a/b").is_dir());
        assert!(temp.path().join("c").is_dir());
        Ok(())
    }

    #[test]
    fn test_ensure_directories_keeps_existing_contents() -> anyhow::Result<()> {
        let temp = TempDir::new()?;
        fs::create_dir_all(temp.path().join("reports"))?;
        fs::write(temp.path().join("reports/notes.txt"), "keep me")?;

        ensure_directories(temp.path(), &["reports"])?;

        assert_eq!(
            fs::read_to_string(temp.path().join("reports/notes.txt"))?,
            "keep me"
        );
        Ok(())
    }

    #[test]
    fn test_ensure_directories_stops_at_blocking_file() -> anyhow::Result<()> {
        let temp = TempDir::new()?;
        fs::write(temp.path().join("docs"), "not a directory")?;

        let err = ensure_directories(temp.path(), &["reports", "docs/test_plan", "tools"])
            .unwrap_err();

        assert_eq!(err.op, FsOp::CreateDir);
        assert_eq!(err.path, temp.path().join("docs").join("test_plan"));
        assert!(temp.path().join("reports").is_dir());
        assert!(!temp.path().join("tools").exists());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_ensure_directories_permission_denied() -> anyhow::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new()?;
        let root = temp.path().join("locked");
        fs::create_dir(&root)?;
        fs::set_permissions(&root, fs::Permissions::from_mode(0o555))?;

        // Privileged users (e.g. root in CI containers) bypass the mode bits
        if fs::create_dir(root.join("write-check")).is_ok() {
            fs::set_permissions(&root, fs::Permissions::from_mode(0o755))?;
            return Ok(());
        }

        let result = ensure_directories(&root, &["docs/test_plan", "reports"]);
        fs::set_permissions(&root, fs::Permissions::from_mode(0o755))?;

        let err = result.unwrap_err();
        assert_eq!(err.op, FsOp::CreateDir);
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(err.path, root.join("docs").join("test_plan"));
        assert!(!root.join("reports").exists());
        Ok(())
    }

    #[test]
    fn test_write_files_requires_parent() -> anyhow::Result<()> {
        let temp = TempDir::new()?;
        let entry = *crate::manifest::find("tools/jira_config.md").unwrap();

        let err = write_files(temp.path(), &[entry], "2025-03-25").unwrap_err();

        assert_eq!(err.op, FsOp::WriteFile);
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!temp.path().join("tools").exists());
        Ok(())
    }

    #[test]
    fn test_write_files_truncates() -> anyhow::Result<()> {
        let temp = TempDir::new()?;
        fs::create_dir_all(temp.path().join("tools"))?;
        let target = temp.path().join("tools/jira_config.md");
        fs::write(&target, "x".repeat(4096))?;

        let entry = *crate::manifest::find("tools/jira_config.md").unwrap();
        let written = write_files(temp.path(), &[entry], "2025-03-25")?;

        let content = fs::read_to_string(&target)?;
        assert!(content.starts_with("# Jira Configuration\n"));
        assert_eq!(written[0].bytes, content.len());
        Ok(())
    }

    #[test]
    fn test_run_reports_every_entry() -> anyhow::Result<()> {
        let temp = TempDir::new()?;
        let config = ScaffoldConfig::new(temp.path().join("qa")).with_clock(fixed(2025, 3, 25));

        let report = run(&config)?;

        assert_eq!(report.date, "2025-03-25");
        assert_eq!(report.directories.len(), DIRECTORIES.len());
        assert_eq!(report.files.len(), FILES.len());
        assert!(report.files.iter().all(|f| f.path.starts_with(&report.root)));
        Ok(())
    }
}
