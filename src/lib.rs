// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod presentation;
pub mod shell;

pub use dirscout_domain as domain;
pub use dirscout_infra as infra;
pub use dirscout_usecase as usecase;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
