//! Filesystem error type shared by the scaffold and verify operations.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The filesystem operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOp {
    CreateDir,
    WriteFile,
    ReadFile,
    ReadDir,
}

impl fmt::Display for FsOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            FsOp::CreateDir => "create directory",
            FsOp::WriteFile => "write file",
            FsOp::ReadFile => "read file",
            FsOp::ReadDir => "read directory",
        };
        f.write_str(verb)
    }
}

/// Any failure touching the filesystem: permission denial, invalid path,
/// disk full, or a file sitting where a directory is expected.
///
/// Never retried. The first one aborts the whole operation.
#[derive(Debug, Error)]
#[error("failed to {op} {}: {source}", path.display())]
pub struct FilesystemError {
    pub op: FsOp,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl FilesystemError {
    pub fn new(op: FsOp, path: impl AsRef<Path>, source: io::Error) -> Self {
        Self {
            op,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}
