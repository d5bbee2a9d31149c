// src/shell.rs
//! Interactive read-eval loop around the locate and summarise use cases.

use std::{
    io::{BufRead, Write},
    time::Instant,
};

use dirscout_domain::{model::SearchOutcome, value_objects::SearchName};
use dirscout_ports::filesystem::DirectoryLister;
use dirscout_shared_kernel::{ErrorContext, Result};
use dirscout_usecase::{LocateFile, SummarizeTree};

use crate::{config::Config, presentation};

/// A parsed menu choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Find,
    Summarize,
    Exit,
    Invalid(String),
}

impl Command {
    /// Matches the line exactly as typed, minus its terminator; `" 1"` is invalid.
    pub fn parse(line: &str) -> Self {
        match line {
            "1" => Self::Find,
            "2" => Self::Summarize,
            "3" => Self::Exit,
            other => Self::Invalid(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingChoice,
    Finished,
}

pub struct Shell<'a, R, W> {
    config: &'a Config,
    lister: &'a dyn DirectoryLister,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(config: &'a Config, lister: &'a dyn DirectoryLister, input: R, output: W) -> Self {
        Self { config, lister, input, output }
    }

    /// Runs until the user picks Exit or input reaches end of file.
    pub fn run(mut self) -> Result<()> {
        let mut state = State::AwaitingChoice;
        while state == State::AwaitingChoice {
            state = self.step()?;
        }
        Ok(())
    }

    fn step(&mut self) -> Result<State> {
        presentation::write_menu(&mut self.output).context("writing menu")?;
        let Some(line) = self.read_line().context("reading menu choice")? else {
            return Ok(State::Finished);
        };

        match Command::parse(&line) {
            Command::Find => self.find(),
            Command::Summarize => self.summarize().map(|()| State::AwaitingChoice),
            Command::Exit => Ok(State::Finished),
            Command::Invalid(choice) => {
                log::debug!("invalid menu choice {choice:?}");
                writeln!(self.output, "{}", presentation::INVALID_CHOICE).context("writing output")?;
                Ok(State::AwaitingChoice)
            }
        }
    }

    fn find(&mut self) -> Result<State> {
        let filename = match &self.config.filename {
            Some(name) => name.clone(),
            None => {
                presentation::write_prompt(&mut self.output, presentation::FILENAME_PROMPT)
                    .context("writing prompt")?;
                match self.read_line().context("reading filename")? {
                    Some(name) => name,
                    None => return Ok(State::Finished),
                }
            }
        };

        let started = Instant::now();
        let outcome = match SearchName::parse(&filename) {
            Ok(name) => {
                writeln!(self.output, "{}", presentation::PROCESSING).context("writing output")?;
                LocateFile::new(self.lister).run(&name, &self.config.start_dir)
            }
            Err(err) => {
                writeln!(self.output, "{err}").context("writing output")?;
                SearchOutcome::NotFound
            }
        };
        let elapsed = started.elapsed();

        presentation::write_search_outcome(&mut self.output, &filename, &outcome).context("writing output")?;
        presentation::write_elapsed(&mut self.output, elapsed).context("writing output")?;
        Ok(State::AwaitingChoice)
    }

    fn summarize(&mut self) -> Result<()> {
        let started = Instant::now();
        writeln!(self.output, "{}", presentation::PROCESSING).context("writing output")?;
        let summary = SummarizeTree::new(self.lister).run(&self.config.start_dir);
        let elapsed = started.elapsed();

        presentation::write_summary(&mut self.output, &summary).context("writing output")?;
        presentation::write_elapsed(&mut self.output, elapsed).context("writing output")?;
        Ok(())
    }

    /// Reads one line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
