use std::{fs, path::Path};

use anyhow::{Context, Result};

/// Replace every occurrence of `placeholder` in `text` with `value`.
pub fn substitute(text: &str, placeholder: &str, value: &str) -> String {
    text.replace(placeholder, value)
}

/// Render `template` to `output` by placeholder substitution.
///
/// # Errors
/// Returns an error if the template cannot be read or the output cannot be written.
pub fn render_template(template: &Path, output: &Path, placeholder: &str, value: &str) -> Result<()> {
    let text = fs::read_to_string(template)
        .with_context(|| format!("failed to read template {}", template.display()))?;
    fs::write(output, substitute(&text, placeholder, value))
        .with_context(|| format!("failed to write {}", output.display()))
}
