// src/main.rs
use std::{io, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use dirscout::{args::Args, config::Config, infra::FsDirectoryLister, shell::Shell};

fn main() -> ExitCode {
    let config = Config::from(Args::parse());
    init_logging(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(config: &Config) {
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .init();
}

fn run(config: &Config) -> Result<()> {
    log::info!("dirscout v{} starting at {}", dirscout::VERSION, config.start_dir.display());
    let lister = FsDirectoryLister::new();
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Shell::new(config, &lister, stdin, stdout).run()?;
    Ok(())
}
