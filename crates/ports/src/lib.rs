//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: single-directory listing and file size lookup
//!
//! The traversal and aggregation use cases only see these traits, so tests
//! can swap the real filesystem for an in-memory tree that simulates
//! unreadable directories or files vanishing mid-walk.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
