//! Terminal styling helpers for console diagnostics

use console::{style, Emoji};

pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");

/// Print a success message to stdout
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an info message to stdout
pub fn print_info(message: &str) {
    println!("{}{}", INFO, message);
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print the example invocations shown alongside help on no-argument runs
pub fn print_examples() {
    println!();
    println!("{}", style("Examples:").bold());
    println!("  fit2csv activity.fit");
    println!("  fit2csv activity.fit output.csv");
    println!("  fit2csv /path/to/folder/with/fits");
    println!("  fit2csv /path/to/folder/with/fits /path/to/output_folder");
    println!();
}
