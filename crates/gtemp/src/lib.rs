#![warn(missing_docs)]

//! Nozzle temperature expansion for G-code templates.
//!
//! A G-code template is an ASCII G-code file whose name ends in
//! [`TEMPLATE_SUFFIX`] and which carries the [`NOZZLE_TEMP_PLACEHOLDER`]
//! token both in its filename and after an [`NOZZLE_TEMP_COMMAND`] in its
//! body. This crate renders one concrete G-code file per temperature.
//! It performs no I/O; reading templates and writing outputs is left to
//! the caller.
//!
//! # Example
//!
//! ```
//! use gtemp::{Template, TemperatureSet};
//!
//! let template = Template::new(
//!     "model_##NOZZLETEMP##_41m.gtemplate",
//!     "M104 ##NOZZLETEMP## ; set temperature\n",
//! );
//! let temps = TemperatureSet::from_preset("PLA")?;
//!
//! for temp in temps.iter() {
//!     let output = template.expand(temp)?;
//!     println!("{} ({} bytes)", output.filename, output.contents.len());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod material;
pub mod template;
pub mod temps;

pub use error::{ConfigError, Result, TemplateError};
pub use material::Material;
pub use template::{expand, RenderedOutput, Template};
pub use temps::{Temperature, TemperatureSet, TemperatureSource};

/// Token replaced by the nozzle temperature in filenames and contents.
pub const NOZZLE_TEMP_PLACEHOLDER: &str = "##NOZZLETEMP##";

/// G-code command that sets the nozzle temperature.
pub const NOZZLE_TEMP_COMMAND: &str = "M104";

/// Filename suffix of a G-code template.
pub const TEMPLATE_SUFFIX: &str = ".gtemplate";

/// Filename suffix of a rendered G-code file.
pub const GCODE_SUFFIX: &str = ".gcode";
