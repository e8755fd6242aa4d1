use std::io::{self, Write};

use colored::*;
use console::Term;

/// Print a section header centered on the terminal width
pub fn print_header(title: &str) {
    let width = Term::stdout().size().1 as usize;
    let title = format!(" {} ", title);
    println!("\n{}\n", format!("{:^w$}", title, w = width).bold());
}

/// Print a `==========`-framed banner around one flow of the menu
pub fn print_banner(title: &str) {
    println!("{}", format!("========== {} ==========", title).bold());
}

/// Print an inline prompt and flush so it lands before the read
pub fn prompt(message: &str) {
    print!("{} ", message.bold());
    let _ = io::stdout().flush();
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}
