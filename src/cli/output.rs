use colored::Colorize;
use std::fmt;

/// Standard CLI output helpers; all user-visible messages go through these
/// so styling stays in one place.
pub fn info(message: impl fmt::Display) {
    println!("{} {}", "[i]".cyan(), message);
}

pub fn success(message: impl fmt::Display) {
    println!("{} {}", "[✓]".green(), message);
}

pub fn warning(message: impl fmt::Display) {
    println!("{} {}", "[!]".yellow(), message);
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{} {}", "[x]".red(), message);
}

pub fn section(title: impl fmt::Display) {
    println!();
    println!("{}", title.to_string().bold().underline());
}

/// One metric line, e.g. `Total Income: 5000 AED`.
pub fn metric(label: &str, amount: i64, currency: &str) {
    println!("{}: {} {}", label.bold(), amount, currency);
}
