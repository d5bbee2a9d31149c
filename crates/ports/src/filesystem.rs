// crates/ports/src/filesystem.rs
use std::{
    fmt, io,
    path::{Path, PathBuf},
};

use dirscout_shared_kernel::{FileName, FileSize, InfraResult};

/// A non-directory entry of a listing.
///
/// `path` keeps the exact bytes the host returned; `name` is its base name
/// for display and matching, lossily converted when not UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedFile {
    pub name: FileName,
    pub path: PathBuf,
}

impl ListedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = FileName::new(path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default());
        Self { name, path }
    }
}

/// Contents of one directory, split into files and subdirectories.
///
/// Anything that is not a directory (regular files, symlinks, sockets, ...)
/// lands in `files`. Symlinks to directories are not descended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    pub directory: PathBuf,
    pub files: Vec<ListedFile>,
    pub subdirectories: Vec<PathBuf>,
}

impl DirectoryListing {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self { directory: directory.into(), ..Self::default() }
    }
}

/// Why a directory contributed nothing to a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    PermissionDenied,
    NotFound,
    NotADirectory,
    Other(io::ErrorKind),
}

impl From<io::ErrorKind> for SkipReason {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::NotADirectory => Self::NotADirectory,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::NotFound => write!(f, "not found"),
            Self::NotADirectory => write!(f, "not a directory"),
            Self::Other(kind) => write!(f, "{kind}"),
        }
    }
}

/// Outcome of listing a single directory. Failures are values, not errors:
/// the walker drops skipped directories and keeps going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome {
    Listed(DirectoryListing),
    Skipped { directory: PathBuf, reason: SkipReason },
}

/// Port for reading the host directory tree one level at a time.
pub trait DirectoryLister {
    fn list(&self, directory: &Path) -> ListOutcome;

    /// Size of a listed file. Errors mean the file could not be stat'ed
    /// (typically it vanished after the listing was taken).
    fn file_size(&self, path: &Path) -> InfraResult<FileSize>;
}

impl<T: DirectoryLister + ?Sized> DirectoryLister for &T {
    fn list(&self, directory: &Path) -> ListOutcome {
        (**self).list(directory)
    }

    fn file_size(&self, path: &Path) -> InfraResult<FileSize> {
        (**self).file_size(path)
    }
}
