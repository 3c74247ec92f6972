//! Interactive prompts using dialoguer

use std::path::PathBuf;

use anyhow::Result;
use dialoguer::Input;

/// Prompt for an input path when no arguments were supplied.
///
/// Returns `None` when the user submits an empty line. A non-interactive
/// stdin (piped input, EOF) surfaces as an error, which callers treat the
/// same as an empty response.
pub fn prompt_input_path() -> Result<Option<PathBuf>> {
    let response: String = Input::new()
        .with_prompt("Enter path to .fit file or directory (or press Enter to exit)")
        .allow_empty(true)
        .interact_text()?;

    let trimmed = response.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(PathBuf::from(trimmed)))
    }
}
