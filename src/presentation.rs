// src/presentation.rs
use std::{io::Write, time::Duration};

use dirscout_domain::model::{SearchOutcome, TreeSummary};

pub const MENU: &str = "\n1. Find a file\n2. Count files and display summary information\n3. Exit\n";
pub const CHOICE_PROMPT: &str = "Please enter the number corresponding to your choice: ";
pub const FILENAME_PROMPT: &str = "Enter the filename to search: ";
pub const PROCESSING: &str = "Processing... Please wait.";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

pub fn write_menu(out: &mut impl Write) -> std::io::Result<()> {
    write!(out, "{MENU}{CHOICE_PROMPT}")?;
    out.flush()
}

pub fn write_prompt(out: &mut impl Write, prompt: &str) -> std::io::Result<()> {
    write!(out, "{prompt}")?;
    out.flush()
}

pub fn write_search_outcome(out: &mut impl Write, filename: &str, outcome: &SearchOutcome) -> std::io::Result<()> {
    match outcome {
        SearchOutcome::Found(path) => writeln!(out, "File found at: {path}"),
        SearchOutcome::NotFound => writeln!(out, "{filename} not found."),
    }
}

/// Totals, then one line per extension in first-seen order.
pub fn write_summary(out: &mut impl Write, summary: &TreeSummary) -> std::io::Result<()> {
    writeln!(out, "Total Files: {}", summary.total_files)?;
    writeln!(out, "Total Bytes Used: {:#}", summary.total_bytes)?;
    for (ext, count) in summary.extensions.iter() {
        writeln!(out, "{ext}: {count} files")?;
    }
    Ok(())
}

pub fn write_elapsed(out: &mut impl Write, elapsed: Duration) -> std::io::Result<()> {
    writeln!(out, "Time taken: {} seconds", elapsed.as_secs_f64())
}
