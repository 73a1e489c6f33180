//! G-code template validation and expansion.

use std::path::{Path, PathBuf};

use crate::error::{Result, TemplateError};
use crate::temps::Temperature;
use crate::{GCODE_SUFFIX, NOZZLE_TEMP_COMMAND, NOZZLE_TEMP_PLACEHOLDER, TEMPLATE_SUFFIX};

/// A G-code template read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Source path, used in error reports.
    pub path: PathBuf,
    /// File name, including the template suffix.
    pub filename: String,
    /// Full template text.
    pub contents: String,
}

/// One concrete G-code file rendered from a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    /// Output file name, ending in the G-code suffix.
    pub filename: String,
    /// Output file text.
    pub contents: String,
}

impl Template {
    /// Create a template whose path is its bare filename.
    pub fn new(filename: impl Into<String>, contents: impl Into<String>) -> Self {
        let filename = filename.into();
        Self {
            path: PathBuf::from(&filename),
            filename,
            contents: contents.into(),
        }
    }

    /// Create a template from its source path. The filename is the last
    /// path component.
    pub fn from_path(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            filename,
            contents: contents.into(),
        }
    }

    /// Filename with the template suffix removed.
    pub fn stem(&self) -> Result<&str> {
        self.filename
            .strip_suffix(TEMPLATE_SUFFIX)
            .ok_or_else(|| TemplateError::NotATemplate {
                path: self.path.clone(),
                suffix: TEMPLATE_SUFFIX,
            })
    }

    /// Check the suffix, filename placeholder and nozzle temperature command.
    pub fn validate(&self) -> Result<()> {
        let stem = self.stem()?;

        if !stem.contains(NOZZLE_TEMP_PLACEHOLDER) {
            return Err(TemplateError::MissingFilenamePlaceholder {
                path: self.path.clone(),
                placeholder: NOZZLE_TEMP_PLACEHOLDER,
            });
        }

        if !has_temperature_command(&self.contents) {
            return Err(TemplateError::MissingTemperatureCommand {
                path: self.path.clone(),
                command: NOZZLE_TEMP_COMMAND,
                placeholder: NOZZLE_TEMP_PLACEHOLDER,
            });
        }

        Ok(())
    }

    /// Render this template at one nozzle temperature.
    ///
    /// Every placeholder in the filename becomes `{temp}C` and every
    /// placeholder in the contents becomes `S{temp}`, not only the one
    /// following `M104`.
    pub fn expand(&self, temp: Temperature) -> Result<RenderedOutput> {
        self.validate()?;
        let stem = self.stem()?;

        let filename = format!(
            "{}{}",
            stem.replace(NOZZLE_TEMP_PLACEHOLDER, &format!("{temp}C")),
            GCODE_SUFFIX
        );
        let contents = self
            .contents
            .replace(NOZZLE_TEMP_PLACEHOLDER, &format!("S{temp}"));

        tracing::debug!(template = %self.path.display(), temp, %filename, "expanded template");

        Ok(RenderedOutput { filename, contents })
    }

    /// Source path of this template.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Render `template` at `temp`.
pub fn expand(template: &Template, temp: Temperature) -> Result<RenderedOutput> {
    template.expand(temp)
}

/// Does any line carry `M104` with the placeholder as its temperature word?
///
/// Only a tool select (`T0`) may sit between the two; comments are ignored.
fn has_temperature_command(contents: &str) -> bool {
    contents.lines().any(|line| {
        let command = strip_comments(line);
        command
            .match_indices(NOZZLE_TEMP_COMMAND)
            .filter(|(idx, _)| is_command_word(&command, *idx))
            .any(|(idx, _)| {
                let mut words = command[idx + NOZZLE_TEMP_COMMAND.len()..]
                    .split_whitespace()
                    .skip_while(|word| is_tool_word(word));
                words.next() == Some(NOZZLE_TEMP_PLACEHOLDER)
            })
    })
}

/// `T` followed by a tool number.
fn is_tool_word(word: &str) -> bool {
    word.strip_prefix('T')
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}

/// Drop a trailing `;` comment and any `( ... )` comments from one line.
fn strip_comments(line: &str) -> String {
    let code = line.split(';').next().unwrap_or_default();

    let mut out = String::with_capacity(code.len());
    let mut in_paren = false;
    for c in code.chars() {
        match c {
            '(' => in_paren = true,
            ')' if in_paren => in_paren = false,
            _ if !in_paren => out.push(c),
            _ => {}
        }
    }
    out
}

/// `M104` at `idx` is a whole word: not `XM104` and not `M1040`.
fn is_command_word(line: &str, idx: usize) -> bool {
    let before = line[..idx].chars().next_back();
    let after = line[idx + NOZZLE_TEMP_COMMAND.len()..].chars().next();
    let word_start = !before.is_some_and(|c| c.is_ascii_alphanumeric());
    let word_end = !after.is_some_and(|c| c.is_ascii_digit());
    word_start && word_end
}
