//! gtemp CLI - nozzle temperature sweeps from G-code templates
//!
//! Renders every `.gtemplate` file in a directory once per temperature.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use gtemp::TemperatureSet;
use gtemp_cli::cli::is_confirmation;
use gtemp_cli::render::check_output_dir;
use gtemp_cli::{discover_templates, render_templates, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let temps = TemperatureSet::resolve(cli.temperature_source())?;
    let templates = discover_templates(&cli.templates, cli.recursive)?;
    check_output_dir(&cli.output)?;

    if templates.is_empty() {
        println!(
            "No G-code templates found in {}",
            cli.templates.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "Applying nozzle temps {:?} to {} templates:",
        temps.as_slice(),
        templates.len()
    );
    for path in &templates {
        println!("  {}", display_name(&cli.templates, path));
    }

    if !cli.yes && !confirm()? {
        println!("Aborting export!");
        return Ok(ExitCode::FAILURE);
    }

    let report = render_templates(&templates, &temps, &cli.output)?;

    println!(
        "\nWrote {} G-code files to {}",
        report.written.len(),
        cli.output.display()
    );

    if !report.is_success() {
        eprintln!("\nError: {} failure(s):", report.failures.len());
        for failure in &report.failures {
            eprintln!("  {:#}", failure.error);
        }
    }
    Ok(ExitCode::from(report.exit_status()))
}

/// Ask on stdin whether to proceed. End of input counts as "no".
fn confirm() -> Result<bool> {
    print!("\nConfirm? [Y/n]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("failed to read confirmation")?;
    if read == 0 {
        println!();
        tracing::warn!("no answer on stdin; pass --yes to skip the prompt");
        return Ok(false);
    }

    Ok(is_confirmation(&answer))
}

/// Template path relative to the templates directory, for listing.
fn display_name(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
