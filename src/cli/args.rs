//! Command-line argument definitions using clap

use clap::Parser;
use std::path::{Path, PathBuf};

/// fit2csv - Convert a FIT file or a directory of FIT files to CSV
#[derive(Parser, Debug)]
#[command(name = "fit2csv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to input .fit file or directory
    pub input: Option<PathBuf>,

    /// Output CSV path (default: input with .csv extension).
    /// For directory input, this must be an existing directory.
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Resolve the single-file output path: the explicit argument when given,
    /// otherwise the input's base name with a .csv extension in the input's
    /// directory.
    pub fn resolved_output(&self, input: &Path) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let parent = input.parent().unwrap_or_else(|| Path::new("."));
            let stem = input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("output");
            parent.join(format!("{}.csv", stem))
        })
    }
}
