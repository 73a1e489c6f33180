//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};
use gtemp::{Temperature, TemperatureSource};

const TEMPLATE_HELP: &str = "\
A G-code template is an ASCII G-code file with three properties:

  1. Its filename ends in '.gtemplate'. Rendered files end in '.gcode'.

  2. Its filename contains '##NOZZLETEMP##', which is replaced by the
     temperature followed by a 'C':

       [prefix]_##NOZZLETEMP##_[suffix].gtemplate
       [prefix]_230C_[suffix].gcode

  3. Its contents contain the nozzle temperature command 'M104' followed by
     '##NOZZLETEMP##', which is replaced by the temperature prefixed with an
     'S'. Any other '##NOZZLETEMP##' in the file is replaced the same way:

       M104 ##NOZZLETEMP## ; set temperature
       M104 S230 ; set temperature

Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostic output on stderr.";

/// Command-line arguments for `gtemp`.
#[derive(Parser, Debug)]
#[command(name = "gtemp")]
#[command(version, disable_version_flag = true)]
#[command(about = "Generate an array of G-code files with different nozzle temperatures")]
#[command(after_help = TEMPLATE_HELP)]
#[command(group(
    ArgGroup::new("temps")
        .required(true)
        .args(["temps_preset", "temps_custom"])
))]
pub struct Cli {
    /// Path containing G-code templates: '[name].gtemplate'
    #[arg(short, long, value_name = "PATH")]
    pub templates: PathBuf,

    /// G-code file output directory (created if missing)
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// Select a preset list of nozzle temperatures (PLA, PETG, PETG-CF)...
    #[arg(short = 'p', long, value_name = "MATERIAL")]
    pub temps_preset: Option<String>,

    /// ...or provide a custom list
    #[arg(
        short = 'c',
        long,
        value_name = "TEMP",
        num_args = 1..,
        allow_negative_numbers = true
    )]
    pub temps_custom: Option<Vec<Temperature>>,

    /// Also search sub-directories for templates
    #[arg(short, long)]
    pub recursive: bool,

    /// Render without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

impl Cli {
    /// The temperature source selected on the command line.
    pub fn temperature_source(&self) -> TemperatureSource {
        match (&self.temps_preset, &self.temps_custom) {
            (Some(preset), _) => TemperatureSource::Preset(preset.clone()),
            (None, Some(custom)) => TemperatureSource::Explicit(custom.clone()),
            (None, None) => TemperatureSource::Explicit(Vec::new()),
        }
    }
}

/// Answers to the confirmation prompt that mean "go ahead".
pub fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_confirmation_answers() {
        for answer in ["", " ", "\n", "y", "Y", "yes", "YES\n"] {
            assert!(is_confirmation(answer), "{answer:?} should confirm");
        }
        for answer in ["n", "no", "nope", "q"] {
            assert!(!is_confirmation(answer), "{answer:?} should abort");
        }
    }
}
