//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`walk`]: lazy directory-by-directory traversal that skips unreadable subtrees
//! - [`locate`]: find the first file with an exact base name
//! - [`summarize`]: count files, sum their sizes and tally extensions
//!
//! Use cases depend on domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod locate;
pub mod summarize;
pub mod walk;

pub use locate::LocateFile;
pub use summarize::SummarizeTree;
pub use walk::{TreeWalker, VisitedDirectory, WalkStep};
