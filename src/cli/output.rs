use chrono::Local;
use colored::*;
use std::io::Write;
use std::path::Path;

use crate::common::format::{format_count, format_path};
use crate::scanner::ScanSummary;

/// Print the startup banner: program name, version, and current time
pub fn print_banner() {
    let stamp = Local::now().format("%H:%M %d.%m.%Y");
    println!(
        "{} {}\n",
        concat!("SmartDaemons v", env!("CARGO_PKG_VERSION")).bold(),
        format!("- {}", stamp).dimmed()
    );
}

/// Print the header for a location about to be scanned
pub fn print_location_header(location: &Path) {
    println!(
        "{}{}",
        "Scanning location: ".bold(),
        format_path(location).cyan()
    );
}

/// Notice for a location that could not be listed
pub fn print_invalid_location() {
    println!("{}", "Invalid directory".dimmed());
}

/// A file whose name matched an allowed prefix
pub fn print_known(name: &str) {
    println!("{}", name.dimmed());
}

/// A file with no matching prefix, reported only (clean mode off)
pub fn print_unexpected(name: &str) {
    println!(
        "{} {}",
        name.bright_red(),
        "<-- unexpected daemon".yellow().bold()
    );
}

/// Prompt for one unexpected file; the answer is read by the caller
pub fn print_delete_prompt(name: &str) {
    print!("{} : delete this daemon? (y/n) ", name.bright_red());
    let _ = std::io::stdout().flush();
}

pub fn print_deleted() {
    println!("{}", "  --> daemon has been deleted!".green().bold());
}

pub fn print_delete_failed(err: &std::io::Error) {
    println!(
        "{} {}",
        "      Error deleting daemon:".red().bold(),
        err.to_string().red()
    );
}

pub fn print_not_deleted() {
    println!("{}", "  --> daemon has NOT been deleted!".yellow().bold());
}

/// Blank line separating one location's report from the next
pub fn print_location_footer() {
    println!();
}

/// End-of-run summary
pub fn print_summary(summary: &ScanSummary, clean: bool) {
    println!("{}", "─".repeat(60).dimmed());
    println!(
        "  Scanned {} location{} ({} unreadable)  •  {} known  •  {} unexpected",
        summary.locations,
        if summary.locations == 1 { "" } else { "s" },
        summary.unreadable,
        format_count(summary.known),
        summary.unexpected
    );

    if summary.deleted > 0 || summary.delete_failed > 0 {
        println!(
            "  {} deleted  •  {} failed to delete",
            summary.deleted.to_string().green(),
            summary.delete_failed.to_string().red()
        );
    } else if !clean && summary.unexpected > 0 {
        println!(
            "  {} Run {} to remove unexpected daemons interactively",
            "💡",
            "smartdaemons --clean".cyan()
        );
    }
    println!();
}
