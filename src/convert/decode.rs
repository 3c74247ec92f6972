//! Record extraction via the fitparser crate.
//!
//! Decoding of the binary FIT format is entirely delegated to `fitparser`;
//! this module only filters the decoded message stream down to "record"
//! messages and flattens each one into a name-to-value row. Field values are
//! rendered to strings here so the CSV layer never sees parser types.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use fitparser::profile::MesgNum;
use fitparser::Value;

use super::error::ConvertError;

/// One "record" message flattened to field name -> rendered value.
///
/// Later same-named fields overwrite earlier ones within a single message.
pub type Row = BTreeMap<String, String>;

/// Decode a FIT file and return one [`Row`] per "record" message, in the
/// order the messages appear in the file. Messages of any other kind are
/// ignored.
pub fn read_rows(path: &Path) -> Result<Vec<Row>, ConvertError> {
    let mut file = File::open(path).map_err(|source| ConvertError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let messages = fitparser::from_reader(&mut file).map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(messages
        .iter()
        .filter(|message| message.kind() == MesgNum::Record)
        .map(|message| flatten(message.fields().iter().map(|f| (f.name(), f.value()))))
        .collect())
}

/// Flatten one message's fields into a [`Row`]. Last occurrence wins on
/// duplicate field names.
fn flatten<'a>(fields: impl Iterator<Item = (&'a str, &'a Value)>) -> Row {
    let mut row = Row::new();
    for (name, value) in fields {
        row.insert(name.to_string(), render_value(value));
    }
    row
}

/// Render a parser value for a CSV cell. Scalars use their natural display
/// form; array-valued fields (e.g. left/right balance pairs) join their
/// elements with `|` to keep the cell unambiguous.
fn render_value(value: &Value) -> String {
    match value {
        Value::Array(elements) => elements
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join("|"),
        Value::String(text) => text.clone(),
        scalar => scalar.to_string(),
    }
}
