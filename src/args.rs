// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "dirscout",
    version = crate::VERSION,
    about = "Find a file by name or summarise a directory tree, from an interactive menu"
)]
pub struct Args {
    /// Filename to search for; prompted for on each search when omitted
    #[arg(long)]
    pub filename: Option<String>,

    /// Directory every operation starts from (defaults to the filesystem root)
    #[arg(long = "start_dir", visible_alias = "start-dir", value_hint = ValueHint::DirPath)]
    pub start_dir: Option<PathBuf>,

    /// Raise log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
