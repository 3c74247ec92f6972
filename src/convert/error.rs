//! Error types for the conversion path.
//!
//! Each variant names the file it concerns, so a diagnostic printed from a
//! batch run identifies which input or output was at fault. Decode and
//! output failures are kept distinct: the former skips the file, the latter
//! may leave a partially written CSV behind.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting a single FIT file.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file could not be opened for reading.
    #[error("Failed to read FIT file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input file opened but could not be decoded as FIT.
    #[error("Failed to read FIT file '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: fitparser::Error,
    },

    /// The output CSV could not be created or written.
    #[error("Failed to write CSV '{path}': {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
