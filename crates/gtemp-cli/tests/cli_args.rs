//! Integration tests for the command-line surface

use clap::error::ErrorKind;
use clap::Parser;
use gtemp::TemperatureSource;
use gtemp_cli::Cli;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("gtemp").chain(args.iter().copied()))
}

#[test]
fn test_preset_selected() {
    let cli = parse(&["-t", "templates", "-o", "out", "-p", "PETG-CF"]).unwrap();
    assert_eq!(
        cli.temperature_source(),
        TemperatureSource::Preset("PETG-CF".into())
    );
    assert!(!cli.recursive);
    assert!(!cli.yes);
}

#[test]
fn test_custom_list_keeps_order() {
    let cli = parse(&[
        "--templates", "t", "--output", "o", "--temps-custom", "230", "200", "-5", "--yes",
    ])
    .unwrap();
    assert_eq!(
        cli.temperature_source(),
        TemperatureSource::Explicit(vec![230, 200, -5])
    );
    assert!(cli.yes);
}

#[test]
fn test_preset_and_custom_conflict() {
    let err = parse(&["-t", "t", "-o", "o", "-p", "PLA", "-c", "200"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn test_temperature_source_required() {
    let err = parse(&["-t", "t", "-o", "o"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_output_required() {
    let err = parse(&["-t", "t", "-p", "PLA"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_non_integer_temperature_rejected() {
    let err = parse(&["-t", "t", "-o", "o", "-c", "210.5"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn test_help_and_version_flags() {
    assert_eq!(parse(&["-h"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
    assert_eq!(parse(&["-v"]).unwrap_err().kind(), ErrorKind::DisplayVersion);
    assert_eq!(
        parse(&["--version"]).unwrap_err().kind(),
        ErrorKind::DisplayVersion
    );
}
