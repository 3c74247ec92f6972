//! fit2csv: FIT activity file to CSV converter
//!
//! Converts a single .fit file or a directory of .fit files to CSV, one
//! output per input, with columns derived from the union of field names in
//! the file's "record" messages.

mod cli;
#[cfg(feature = "decoder")]
mod convert;
#[cfg(feature = "decoder")]
mod report;
mod utils;

use std::process;

// The FIT decoding capability is compiled in through the `decoder` feature.
// A build without it prints the remedy and exits before argument parsing.
#[cfg(not(feature = "decoder"))]
fn main() {
    eprintln!(
        "Missing FIT decoding support. Rebuild with: cargo install fit2csv --features decoder"
    );
    process::exit(1);
}

#[cfg(feature = "decoder")]
fn main() {
    process::exit(run());
}

#[cfg(feature = "decoder")]
fn run() -> i32 {
    use clap::{CommandFactory, Parser};

    use cli::{prompt_input_path, Cli};
    use convert::{convert_and_report, convert_directory};
    use utils::{print_error, print_examples};

    let cli = Cli::parse();

    // No arguments at all: show help plus examples, then fall back to a
    // single interactive prompt. An empty response exits with code 2.
    let input = match cli.input.clone() {
        Some(path) => path,
        None => {
            let _ = Cli::command().print_help();
            print_examples();
            match prompt_input_path() {
                Ok(Some(path)) => path,
                _ => return 2,
            }
        }
    };

    // Directory input: batch convert all .fit files in the directory
    // (non-recursive).
    if input.is_dir() {
        return convert_directory(&input, cli.output.as_deref());
    }

    if !input.exists() {
        print_error(&format!("Input path does not exist: {}", input.display()));
        return 1;
    }
    if input.is_dir() {
        // Shouldn't reach here, but guard anyway.
        print_error(&format!(
            "Input is a directory, expected a .fit file: {}",
            input.display()
        ));
        return 2;
    }

    let output = cli.resolved_output(&input);
    if convert_and_report(&input, &output) {
        0
    } else {
        1
    }
}
