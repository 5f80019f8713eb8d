//! Terminal presentation helpers.

use colored::*;
use std::fmt::Display;

/// Disables colour when stdout cannot show it (pipes, dumb terminals).
/// Stderr is checked separately by `print_error`.
pub fn configure_color() {
    if supports_color::on(supports_color::Stream::Stdout).is_none() {
        colored::control::set_override(false);
    }
}

/// Print a heading with colored styling and clear separation
pub fn print_heading(text: &str) {
    let heading = format!(" {} ", text).bold().bright_white();
    let line = "=".repeat(50).bright_blue();

    println!("{}", line);
    println!("{}", heading);
    println!("{}", line);
}

/// Print a section heading (smaller than main heading) with colored styling
pub fn print_section(text: &str) {
    let section = format!(" {} ", text).bold().white();
    let line = "-".repeat(40).blue();

    println!("\n{}", line);
    println!("{}", section);
    println!("{}", line);
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", label.bright_cyan(), value);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".bright_green().bold(), message);
}

/// Error line as printed by `print_error`. Without colour the line carries
/// no escape codes at all, whatever the global override says.
fn format_error(message: &str, color: bool) -> String {
    if color {
        format!("{} {}", "✗".bright_red().bold(), message.bright_red())
    } else {
        format!("✗ {}", message)
    }
}

/// Print an error message to stderr, coloured only when stderr supports it
pub fn print_error(message: &str) {
    let color = supports_color::on(supports_color::Stream::Stderr).is_some();
    eprintln!("{}", format_error(message, color));
}
