//! Terminal output helpers for generated reports.

use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

/// Prints a generated report under a colored title rule.
pub fn print_report(title: &str, body: &str) {
    println!();
    println!("{}", title.bold().blue());
    println!("{}", "─".repeat(title.chars().count()).blue());
    println!("{}", body.trim_end());
    println!();
}

pub fn print_saved(path: &Path) {
    println!("{} {}", "Saved to:".green(), path.display());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".bold().red(), message);
}

/// Spinner shown while a provider call is in flight. Call
/// `finish_and_clear` when done.
pub fn spinner(message: &'static str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .expect("valid spinner template"),
    );
    bar.set_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
