//! fit2csv: FIT activity file to CSV conversion
//!
//! A library backing the `fit2csv` command-line tool. It converts FIT files
//! produced by fitness devices into CSV, one output per input, with columns
//! derived from the union of field names found in the file's "record"
//! messages. Decoding of the binary FIT format is delegated to the
//! `fitparser` crate.

pub mod cli;
#[cfg(feature = "decoder")]
pub mod convert;
#[cfg(feature = "decoder")]
pub mod report;
pub mod utils;
