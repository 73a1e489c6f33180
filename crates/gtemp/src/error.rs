//! Error types for template expansion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors in the caller-supplied configuration.
///
/// These are raised before any template is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An explicit temperature list was empty.
    #[error("no temperatures supplied")]
    NoTemperatures,

    /// Preset name is not one of the known materials.
    #[error("unknown material preset '{name}' (known presets: {known})")]
    UnknownMaterial {
        /// The name that was looked up.
        name: String,
        /// Comma-separated list of known preset names.
        known: String,
    },
}

/// Errors for a single malformed template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Filename lacks the template suffix.
    #[error("not a G-code template (expected a '{suffix}' file): {}", path.display())]
    NotATemplate {
        /// Offending template path.
        path: PathBuf,
        /// Suffix the filename should end in.
        suffix: &'static str,
    },

    /// Filename lacks the placeholder token.
    #[error("template filename is missing '{placeholder}': {}", path.display())]
    MissingFilenamePlaceholder {
        /// Offending template path.
        path: PathBuf,
        /// The placeholder token.
        placeholder: &'static str,
    },

    /// Contents lack the nozzle temperature command followed by the placeholder.
    #[error("template is missing nozzle temperature template text '{command} {placeholder}': {}", path.display())]
    MissingTemperatureCommand {
        /// Offending template path.
        path: PathBuf,
        /// The nozzle temperature command.
        command: &'static str,
        /// The placeholder token.
        placeholder: &'static str,
    },
}

impl TemplateError {
    /// Path of the template that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotATemplate { path, .. }
            | Self::MissingFilenamePlaceholder { path, .. }
            | Self::MissingTemperatureCommand { path, .. } => path,
        }
    }
}

/// Result type for template operations.
pub type Result<T, E = TemplateError> = std::result::Result<T, E>;
