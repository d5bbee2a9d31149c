use std::collections::HashMap;

use dirscout_shared_kernel::FileExtension;

/// Frequency count of file extensions, enumerated in first-seen order.
///
/// Keys are lowercased and keep their leading `.`; files without an
/// extension count under the empty key.
#[derive(Debug, Clone, Default)]
pub struct ExtensionTally {
    entries: Vec<(FileExtension, u64)>,
    index: HashMap<FileExtension, usize>,
}

impl ExtensionTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, ext: FileExtension) {
        match self.index.get(&ext) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(ext.clone(), self.entries.len());
                self.entries.push((ext, 1));
            }
        }
    }

    pub fn count(&self, ext: &str) -> u64 {
        self.index.get(&FileExtension::new(ext)).map_or(0, |&slot| self.entries[slot].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FileExtension, u64)> {
        self.entries.iter().map(|(ext, count)| (ext, *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

// Equality ignores enumeration order.
impl PartialEq for ExtensionTally {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(ext, count)| other.count(ext.as_str()) == count)
    }
}

impl Eq for ExtensionTally {}

impl FromIterator<FileExtension> for ExtensionTally {
    fn from_iter<I: IntoIterator<Item = FileExtension>>(iter: I) -> Self {
        let mut tally = Self::new();
        iter.into_iter().for_each(|ext| tally.record(ext));
        tally
    }
}
