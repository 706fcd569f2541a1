// mediamanifest-cli/src/output.rs
//
// Terminal output helpers for human readable summaries.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Print a heading with colored styling and clear separation
pub fn print_heading(text: &str) {
    let line = "=".repeat(50);
    println!("\n{}", line.bright_blue());
    println!("{}", format!(" {} ", text).bold());
    println!("{}\n", line.bright_blue());
}

/// Print a section heading (smaller than main heading)
pub fn print_section(text: &str) {
    println!("\n{}", format!(" {} ", text).bold());
    println!("{}", "-".repeat(40).blue());
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", label.bright_cyan(), value);
}
