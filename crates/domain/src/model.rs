use dirscout_shared_kernel::{FilePath, FileSize};

use crate::analytics::ExtensionTally;

/// Result of looking a name up under a root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(FilePath),
    NotFound,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn path(&self) -> Option<&FilePath> {
        match self {
            Self::Found(path) => Some(path),
            Self::NotFound => None,
        }
    }
}

/// Totals gathered over one full walk of a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeSummary {
    pub total_files: u64,
    pub total_bytes: FileSize,
    pub extensions: ExtensionTally,
}

impl TreeSummary {
    pub fn new() -> Self {
        Self::default()
    }
}
