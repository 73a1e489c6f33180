//! Driver for the `gtemp` command.
//!
//! Finds `.gtemplate` files, renders each one at every requested nozzle
//! temperature with [`gtemp::Template::expand`], and writes the results.

pub mod cli;
pub mod discover;
pub mod render;

pub use cli::Cli;
pub use discover::discover_templates;
pub use render::{prepare_output_dir, render_templates, RenderFailure, RenderReport};
