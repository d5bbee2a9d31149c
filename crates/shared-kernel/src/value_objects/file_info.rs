// crates/shared-kernel/src/value_objects/file_info.rs
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Wrapper around `PathBuf` for paths reported back to the user.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FilePath(PathBuf);

impl FilePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for FilePath {
    fn from(path: &str) -> Self {
        Self::new(PathBuf::from(path))
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Base name of a directory entry as returned by a listing.
///
/// Non UTF-8 names are carried lossily; they can never equal a validated
/// search name, which is ASCII only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FileName(String);

impl FileName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extension of this name, see [`FileExtension::of`].
    pub fn extension(&self) -> FileExtension {
        FileExtension::of(&self.0)
    }
}

impl PartialEq<str> for FileName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lowercased file extension including its leading `.`; empty when the name has none.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct FileExtension(String);

impl FileExtension {
    pub fn new(ext: impl Into<String>) -> Self {
        Self(ext.into().to_lowercase())
    }

    /// Splits the extension off a base name.
    ///
    /// The extension starts at the last `.` unless that dot belongs to the
    /// run of leading dots (`.bashrc`, `..x` have none). A trailing dot
    /// yields `"."`.
    pub fn of(name: &str) -> Self {
        let body_start = name.len() - name.trim_start_matches('.').len();
        match name[body_start..].rfind('.') {
            Some(idx) => Self::new(&name[body_start + idx..]),
            None => Self::no_ext(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn no_ext() -> Self {
        Self(String::new())
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
#[repr(transparent)]
pub struct FileSize(u64);

impl FileSize {
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl std::iter::Sum for FileSize {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Self::saturating_add)
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_human())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl FileSize {
    /// Returns a base-1024 human readable representation such as `1.5 KB`.
    ///
    /// Zero renders as `0B`. The value is rounded to two decimals, ties to
    /// even (`1.125` -> `1.12`), and always keeps at least one fractional
    /// digit (`1.0 KB`, not `1 KB`).
    pub fn to_human(self) -> String {
        let bytes = self.bytes();
        if bytes == 0 {
            return "0B".to_string();
        }

        let mut index = 0;
        let mut divisor: u128 = 1;
        while index + 1 < UNITS.len() && u128::from(bytes) >= divisor * 1024 {
            divisor *= 1024;
            index += 1;
        }

        let scaled = bytes as f64 / divisor as f64;
        let rounded = (scaled * 100.0).round_ties_even() / 100.0;
        format!("{} {}", float_text(rounded), UNITS[index])
    }
}

fn float_text(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') { text } else { format!("{text}.0") }
}
