// src/config.rs
use std::path::{Component, PathBuf};

use log::LevelFilter;

use crate::args::Args;

/// Settings for one interactive session, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub filename: Option<String>,
    pub start_dir: PathBuf,
    pub log_level: LevelFilter,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            filename: args.filename,
            start_dir: args.start_dir.unwrap_or_else(filesystem_root),
            log_level: level_for(args.verbose),
        }
    }
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Root of the filesystem holding the current directory (`/` on Unix, the
/// drive root such as `C:\` on Windows).
pub fn filesystem_root() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_default();
    let root: PathBuf = cwd
        .components()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect();
    if root.as_os_str().is_empty() { PathBuf::from(std::path::MAIN_SEPARATOR_STR) } else { root }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn parse(argv: &[&str]) -> Config {
        Config::from(Args::parse_from(std::iter::once("dirscout").chain(argv.iter().copied())))
    }

    #[test]
    fn defaults_to_filesystem_root() {
        let config = parse(&[]);
        assert_eq!(config.filename, None);
        assert!(config.start_dir.has_root());
        assert_eq!(config.start_dir.parent(), None);
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn takes_flags_verbatim() {
        let config = parse(&["--filename", "a b.txt", "--start_dir", "/tmp/x"]);
        assert_eq!(config.filename.as_deref(), Some("a b.txt"));
        assert_eq!(config.start_dir, PathBuf::from("/tmp/x"));
    }

    #[test]
    fn accepts_kebab_case_alias() {
        assert_eq!(parse(&["--start-dir", "/srv"]).start_dir, PathBuf::from("/srv"));
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(parse(&["-v"]).log_level, LevelFilter::Info);
        assert_eq!(parse(&["-vv"]).log_level, LevelFilter::Debug);
        assert_eq!(parse(&["-vvvv"]).log_level, LevelFilter::Trace);
    }
}
