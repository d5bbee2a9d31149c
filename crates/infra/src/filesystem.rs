// crates/infra/src/filesystem.rs
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use dirscout_ports::filesystem::{DirectoryLister, DirectoryListing, ListOutcome, ListedFile, SkipReason};
use dirscout_shared_kernel::{FileSize, InfraResult, InfrastructureError};
use walkdir::WalkDir;

/// Filesystem adapter implementing the `DirectoryLister` port with a
/// single-level `walkdir` walk.
///
/// Symlinks below the listed directory are never followed into: a link to a
/// directory is dropped from the listing, any other link is reported as a
/// file. The listed directory itself may be a link.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDirectoryLister;

impl FsDirectoryLister {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryLister for FsDirectoryLister {
    fn list(&self, directory: &Path) -> ListOutcome {
        let walker = WalkDir::new(directory).max_depth(1).follow_links(false).follow_root_links(true);

        let mut listing = DirectoryListing::new(directory);
        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                // Depth 0 errors come from the directory itself: stat or read_dir failed.
                Err(err) if err.depth() == 0 => {
                    log::debug!("skipping {}: {err}", directory.display());
                    let reason = err.io_error().map_or(SkipReason::Other(io::ErrorKind::Other), |e| e.kind().into());
                    return skipped(directory, reason);
                }
                Err(err) => {
                    log::debug!("unreadable entry in {}: {err}", directory.display());
                    continue;
                }
            };

            if entry.depth() == 0 {
                if !entry.file_type().is_dir() {
                    return skipped(directory, SkipReason::NotADirectory);
                }
            } else if entry.file_type().is_dir() {
                listing.subdirectories.push(entry.into_path());
            } else if entry.path_is_symlink() && entry.path().is_dir() {
                log::trace!("not following symlink {}", entry.path().display());
            } else {
                listing.files.push(ListedFile::new(entry.into_path()));
            }
        }
        ListOutcome::Listed(listing)
    }

    fn file_size(&self, path: &Path) -> InfraResult<FileSize> {
        fs::metadata(path).map(|meta| FileSize::new(meta.len())).map_err(|source| {
            InfrastructureError::FileSystemOperation {
                operation: "stat".to_string(),
                path: PathBuf::from(path),
                source,
            }
        })
    }
}

fn skipped(directory: &Path, reason: SkipReason) -> ListOutcome {
    ListOutcome::Skipped { directory: directory.to_path_buf(), reason }
}
