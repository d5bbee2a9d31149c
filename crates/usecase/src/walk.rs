use std::path::{Path, PathBuf};

use dirscout_ports::filesystem::{DirectoryLister, ListOutcome, ListedFile, SkipReason};

/// A directory that was listed, with its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedDirectory {
    pub directory: PathBuf,
    pub files: Vec<ListedFile>,
}

/// One step of a walk, including the directories that had to be skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkStep {
    Visited(VisitedDirectory),
    Skipped { directory: PathBuf, reason: SkipReason },
}

/// Depth-first, pre-order walk over a tree through a [`DirectoryLister`].
///
/// Only one directory listing is held at a time besides the queue of
/// pending subdirectories. Iterating the walker yields visited directories
/// and silently drops skipped ones; use [`TreeWalker::next_step`] to observe
/// skips.
pub struct TreeWalker<L> {
    lister: L,
    pending: Vec<PathBuf>,
    skipped: usize,
}

impl<L: DirectoryLister> TreeWalker<L> {
    pub fn new(lister: L, root: impl AsRef<Path>) -> Self {
        Self { lister, pending: vec![root.as_ref().to_path_buf()], skipped: 0 }
    }

    pub fn next_step(&mut self) -> Option<WalkStep> {
        let directory = self.pending.pop()?;
        let step = match self.lister.list(&directory) {
            ListOutcome::Listed(mut listing) => {
                // Reversed so the first listed subdirectory is visited next.
                self.pending.extend(std::mem::take(&mut listing.subdirectories).into_iter().rev());
                WalkStep::Visited(VisitedDirectory { directory: listing.directory, files: listing.files })
            }
            ListOutcome::Skipped { directory, reason } => {
                self.skipped += 1;
                WalkStep::Skipped { directory, reason }
            }
        };
        Some(step)
    }

    /// Number of directories skipped so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<L: DirectoryLister> Iterator for TreeWalker<L> {
    type Item = VisitedDirectory;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.next_step()? {
                WalkStep::Visited(visited) => return Some(visited),
                WalkStep::Skipped { directory, reason } => {
                    log::debug!("skipped {} ({reason})", directory.display());
                }
            }
        }
    }
}
