// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;

pub use filesystem::FsDirectoryLister;
