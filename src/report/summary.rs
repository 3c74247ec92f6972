//! Batch results table

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::convert::{ConvertError, Outcome};

/// Per-file results collected over a batch run, displayed as a table before
/// the closing summary line.
#[derive(Debug, Default)]
pub struct BatchSummary {
    results: Vec<(String, Result<Outcome, ConvertError>)>,
}

impl BatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one file's outcome under its display name.
    pub fn record(&mut self, name: String, result: Result<Outcome, ConvertError>) {
        self.results.push((name, result));
    }

    pub fn display(&self) {
        println!();
        println!(
            "  {} {}",
            style("📋").cyan(),
            style("BATCH RESULTS").white().bold()
        );

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("File").add_attribute(Attribute::Bold),
            Cell::new("Result").add_attribute(Attribute::Bold),
        ]);

        for (name, result) in &self.results {
            let cell = match result {
                Ok(Outcome::Written { rows }) => {
                    Cell::new(format!("{} rows", rows)).fg(Color::Green)
                }
                Ok(Outcome::Empty) => Cell::new("no records").fg(Color::Yellow),
                Err(err) => Cell::new(root_cause(err)).fg(Color::Red),
            };
            table.add_row(vec![Cell::new(name), cell]);
        }

        // Indent the table
        for line in table.to_string().lines() {
            println!("  {}", line);
        }
        println!();
    }
}

/// The underlying cause, without the path prefix the per-file diagnostic
/// already printed.
fn root_cause(err: &ConvertError) -> String {
    use std::error::Error;
    err.source()
        .map(|source| source.to_string())
        .unwrap_or_else(|| err.to_string())
}
