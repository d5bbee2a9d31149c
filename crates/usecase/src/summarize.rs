use std::path::Path;

use dirscout_domain::model::TreeSummary;
use dirscout_ports::filesystem::DirectoryLister;

use crate::walk::TreeWalker;

/// Walks a whole tree and totals file count, bytes and extensions.
///
/// The file count comes from the listings, so a file that disappears before
/// its size is read still counts as a file but adds zero bytes.
pub struct SummarizeTree<'a> {
    lister: &'a dyn DirectoryLister,
}

impl<'a> SummarizeTree<'a> {
    pub fn new(lister: &'a dyn DirectoryLister) -> Self {
        Self { lister }
    }

    pub fn run(&self, root: &Path) -> TreeSummary {
        log::info!("summarising {}", root.display());
        let mut summary = TreeSummary::new();
        let mut walker = TreeWalker::new(self.lister, root);
        for visited in walker.by_ref() {
            summary.total_files += visited.files.len() as u64;
            for file in &visited.files {
                match self.lister.file_size(&file.path) {
                    Ok(size) => summary.total_bytes = summary.total_bytes.saturating_add(size),
                    Err(err) => log::trace!("size unavailable, counting 0 bytes: {err}"),
                }
                summary.extensions.record(file.name.extension());
            }
        }
        log::info!(
            "summarised {} files in {} extensions ({} directories skipped)",
            summary.total_files,
            summary.extensions.len(),
            walker.skipped()
        );
        summary
    }
}
