//! Compare an existing project tree against the layout and file table.
//!
//! Read-only. Useful after a partial or interrupted run to see what a
//! re-run would restore.

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{FilesystemError, FsOp};
use crate::manifest::FILES;
use crate::paths::{self, DIRECTORIES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirStatus {
    Present,
    Missing,
    /// A non-directory sits at this path or at one of its ancestors
    NotADirectory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Match,
    Missing,
    /// Exists but differs from the template rendered for the checked date
    Drifted,
}

#[derive(Debug, Clone, Serialize)]
pub struct DirCheck {
    pub path: &'static str,
    pub status: DirStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileCheck {
    pub path: &'static str,
    pub status: FileStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub root: PathBuf,
    pub date: String,
    pub directories: Vec<DirCheck>,
    pub files: Vec<FileCheck>,
    /// Regular files under the root that the table does not know about
    pub extras: Vec<PathBuf>,
}

impl VerifyReport {
    /// Every directory present and every file matching. Extras are ignored.
    pub fn is_clean(&self) -> bool {
        self.directories.iter().all(|d| d.status == DirStatus::Present)
            && self.files.iter().all(|f| f.status == FileStatus::Match)
    }

    pub fn problems(&self) -> usize {
        self.directories
            .iter()
            .filter(|d| d.status != DirStatus::Present)
            .count()
            + self
                .files
                .iter()
                .filter(|f| f.status != FileStatus::Match)
                .count()
    }
}

/// Check `root` against the expected layout, rendering dated files for `date`.
pub fn verify(root: &Path, date: &str) -> Result<VerifyReport, FilesystemError> {
    let directories = DIRECTORIES
        .iter()
        .map(|&dir| DirCheck {
            path: dir,
            status: dir_status(root, dir),
        })
        .collect();

    let mut files = Vec::with_capacity(FILES.len());
    for entry in FILES {
        let path = paths::resolve(root, entry.path);
        let status = match fs::read(&path) {
            Ok(bytes) if bytes == entry.render(date).as_bytes() => FileStatus::Match,
            Ok(_) => FileStatus::Drifted,
            // not found, a directory in its place, or a blocked parent
            Err(_) if !path.is_file() => FileStatus::Missing,
            Err(e) => return Err(FilesystemError::new(FsOp::ReadFile, &path, e)),
        };
        files.push(FileCheck {
            path: entry.path,
            status,
        });
    }

    let extras = find_extras(root)?;

    Ok(VerifyReport {
        root: root.to_path_buf(),
        date: date.to_string(),
        directories,
        files,
        extras,
    })
}

fn dir_status(root: &Path, dir: &str) -> DirStatus {
    if paths::resolve(root, dir).is_dir() {
        return DirStatus::Present;
    }

    // Walk down from the root; the first entry that is not a directory decides
    let mut current = root.to_path_buf();
    let mut segments = dir.split('/').filter(|segment| !segment.is_empty());
    loop {
        if !current.exists() {
            return DirStatus::Missing;
        }
        if !current.is_dir() {
            return DirStatus::NotADirectory;
        }
        match segments.next() {
            Some(segment) => current.push(segment),
            None => return DirStatus::Missing,
        }
    }
}

fn find_extras(root: &Path) -> Result<Vec<PathBuf>, FilesystemError> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let known: Vec<PathBuf> = FILES
        .iter()
        .map(|entry| paths::resolve(Path::new(""), entry.path))
        .collect();

    let mut extras = Vec::new();
    for item in WalkDir::new(root).sort_by_file_name() {
        let item = item.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("filesystem loop"));
            FilesystemError::new(FsOp::ReadDir, path, source)
        })?;
        if !item.file_type().is_file() {
            continue;
        }
        if let Ok(relative) = item.path().strip_prefix(root) {
            if !known.iter().any(|k| k == relative) {
                extras.push(relative.to_path_buf());
            }
        }
    }

    Ok(extras)
}
