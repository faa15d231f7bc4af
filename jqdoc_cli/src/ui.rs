//! Styled terminal output helpers.

use console::style;

pub fn header(message: &str) {
    println!("{}", style(message).bold());
}

pub fn success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red(), message);
}

pub fn error_with_details(message: &str, details: &str) {
    eprintln!("{} {}: {}", style("✗").red(), message, details);
}
