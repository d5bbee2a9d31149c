use std::sync::LazyLock;

use dirscout_shared_kernel::{DomainError, DomainResult};
use regex::Regex;

static ALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_.\- ()]*$").expect("static pattern compiles"));

/// A file name the user asked to locate, restricted to a safe character set.
///
/// Allowed: ASCII letters and digits, `_`, `.`, `-`, `(`, `)` and space. The
/// empty string is accepted; it simply never matches a listed entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchName(String);

impl SearchName {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        if ALLOWED.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(DomainError::InvalidFileName { name: raw.to_string() })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
