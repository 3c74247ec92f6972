//! Conversion core - decode "record" messages, flatten fields, emit CSV.
//!
//! The whole pipeline is a single pass per file: parse records via
//! `fitparser`, flatten each into a name-to-value row, then write one CSV
//! with the lexicographically sorted union of field names as the header.
//! Column ordering is computed per file, so it is not guaranteed consistent
//! across a batch.

mod batch;
mod decode;
mod error;

use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

pub use batch::convert_directory;
pub use decode::{read_rows, Row};
pub use error::ConvertError;

use crate::utils::{print_error, print_info, print_success};

/// What a successful conversion produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A CSV with a header line and `rows` data rows was written.
    Written { rows: usize },
    /// The input held no "record" messages; a zero-byte output was created.
    Empty,
}

impl Outcome {
    /// The diagnostic reported for this outcome, naming the output path.
    pub fn describe(&self, output: &Path) -> String {
        match self {
            Outcome::Written { rows } => {
                format!("Wrote {} records to {}", rows, output.display())
            }
            Outcome::Empty => format!(
                "No 'record' messages found. Created empty file: {}",
                output.display()
            ),
        }
    }
}

/// Convert a single FIT file to CSV.
///
/// On decode failure the output file is not created or modified. On write
/// failure a partially written output may remain. A file with zero "record"
/// messages yields a zero-byte output and counts as success.
pub fn convert_file(input: &Path, output: &Path) -> Result<Outcome, ConvertError> {
    let rows = read_rows(input)?;

    if rows.is_empty() {
        File::create(output).map_err(|source| ConvertError::Output {
            path: output.to_path_buf(),
            source: source.into(),
        })?;
        return Ok(Outcome::Empty);
    }

    let header = header_for(&rows);
    write_csv(output, &header, &rows)?;
    Ok(Outcome::Written { rows: rows.len() })
}

/// Convert a single file, printing the outcome or error diagnostic.
/// Returns whether the conversion succeeded.
pub fn convert_and_report(input: &Path, output: &Path) -> bool {
    match convert_file(input, output) {
        Ok(outcome @ Outcome::Written { .. }) => {
            print_success(&outcome.describe(output));
            true
        }
        Ok(outcome @ Outcome::Empty) => {
            print_info(&outcome.describe(output));
            true
        }
        Err(err) => {
            print_error(&err.to_string());
            false
        }
    }
}

/// The lexicographically sorted union of field names across all rows.
pub fn header_for(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .flat_map(|row| row.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Write the header and one line per row, in record order. Fields absent
/// from a row are emitted as empty values.
fn write_csv(output: &Path, header: &[String], rows: &[Row]) -> Result<(), ConvertError> {
    let to_output_err = |source: csv::Error| ConvertError::Output {
        path: output.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(output).map_err(to_output_err)?;
    writer.write_record(header).map_err(to_output_err)?;
    for row in rows {
        writer
            .write_record(
                header
                    .iter()
                    .map(|name| row.get(name).map(String::as_str).unwrap_or("")),
            )
            .map_err(to_output_err)?;
    }
    writer
        .flush()
        .map_err(|source| ConvertError::Output {
            path: output.to_path_buf(),
            source: source.into(),
        })?;
    Ok(())
}
