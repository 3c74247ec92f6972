//! Batch orchestration for directory input.
//!
//! Converts every immediate child file with a case-insensitive ".fit"
//! extension, non-recursively, in lexicographically sorted path order. One
//! bad file never blocks the rest: per-file failures are printed and counted,
//! and the aggregate drives the process exit code.

use std::path::{Path, PathBuf};

use super::{convert_file, Outcome};
use crate::report::BatchSummary;
use crate::utils::{create_progress_bar, print_error, print_info, print_success};

/// Convert every `.fit` file directly inside `input_dir`, writing CSVs into
/// `output_arg` (which must already be a directory) or into `input_dir`
/// itself when no output is given.
///
/// Returns the process exit code: 0 when every file converted, 1 when any
/// failed or no `.fit` files were found, 2 when the output argument is not
/// a directory.
pub fn convert_directory(input_dir: &Path, output_arg: Option<&Path>) -> i32 {
    let fits = match list_fit_files(input_dir) {
        Ok(fits) => fits,
        Err(err) => {
            print_error(&format!(
                "Failed to read directory '{}': {}",
                input_dir.display(),
                err
            ));
            return 1;
        }
    };

    if fits.is_empty() {
        print_error(&format!(
            "No .fit files found in directory: {}",
            input_dir.display()
        ));
        return 1;
    }

    let out_dir = match output_arg {
        Some(out) if !out.is_dir() => {
            print_error("When input is a directory, the 'output' argument must be a directory.");
            return 2;
        }
        Some(out) => out,
        None => input_dir,
    };

    let total = fits.len();
    let mut summary = BatchSummary::new();
    let mut successes = 0usize;

    let pb = create_progress_bar(total as u64, "Converting");
    for input in &fits {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string());
        let output = output_path_for(input, out_dir);

        match convert_file(input, &output) {
            Ok(outcome) => {
                successes += 1;
                pb.suspend(|| match outcome {
                    Outcome::Written { .. } => print_success(&outcome.describe(&output)),
                    Outcome::Empty => print_info(&outcome.describe(&output)),
                });
                summary.record(name, Ok(outcome));
            }
            Err(err) => {
                pb.suspend(|| print_error(&err.to_string()));
                summary.record(name, Err(err));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    summary.display();
    println!(
        "Converted {}/{} files into: {}",
        successes,
        total,
        out_dir.display()
    );

    if successes == total {
        0
    } else {
        1
    }
}

/// Immediate child files of `dir` whose extension is ".fit" ignoring case,
/// sorted by full path. Subdirectories and other extensions are skipped.
fn list_fit_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut fits: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_fit_extension(path))
        .collect();
    fits.sort();
    Ok(fits)
}

fn has_fit_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("fit"))
}

/// Output path for one input: its base name with ".csv", in the output
/// directory.
fn output_path_for(input: &Path, out_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    out_dir.join(format!("{}.csv", stem))
}
