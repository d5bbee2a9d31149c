use std::path::Path;

use dirscout_domain::{model::SearchOutcome, value_objects::SearchName};
use dirscout_ports::filesystem::DirectoryLister;
use dirscout_shared_kernel::FilePath;

use crate::walk::TreeWalker;

/// Finds the first file whose base name equals the requested name.
///
/// The match is exact and case-sensitive. The walk stops at the first hit;
/// with duplicates, which one wins depends on listing order.
pub struct LocateFile<'a> {
    lister: &'a dyn DirectoryLister,
}

impl<'a> LocateFile<'a> {
    pub fn new(lister: &'a dyn DirectoryLister) -> Self {
        Self { lister }
    }

    pub fn run(&self, name: &SearchName, root: &Path) -> SearchOutcome {
        log::info!("searching for {name:?} under {}", root.display());
        let found = TreeWalker::new(self.lister, root).find_map(|visited| {
            visited.files.into_iter().find(|file| file.name == *name.as_str()).map(|file| file.path)
        });
        match found {
            Some(path) => SearchOutcome::Found(FilePath::new(path)),
            None => SearchOutcome::NotFound,
        }
    }
}
