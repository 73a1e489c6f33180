//! Rendering templates to disk.
//!
//! A malformed or unreadable template is skipped and recorded in the
//! [`RenderReport`]; the remaining templates are still rendered. Callers
//! decide the exit status from [`RenderReport::is_success`].

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use gtemp::{Template, TemperatureSet};

/// A template or output file that could not be processed.
#[derive(Debug)]
pub struct RenderFailure {
    /// Template that failed.
    pub template: PathBuf,
    /// What went wrong.
    pub error: anyhow::Error,
}

/// Outcome of a render run.
#[derive(Debug, Default)]
pub struct RenderReport {
    /// Every G-code file written, in render order.
    pub written: Vec<PathBuf>,
    /// Templates or writes that failed.
    pub failures: Vec<RenderFailure>,
}

impl RenderReport {
    /// `true` if nothing failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Process exit status for this run: 0 on full success, 1 if anything failed.
    pub fn exit_status(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    fn fail(&mut self, template: &Path, error: anyhow::Error) {
        tracing::error!(template = %template.display(), "{error:#}");
        self.failures.push(RenderFailure {
            template: template.to_path_buf(),
            error,
        });
    }
}

/// Reject an output path that exists but is not a directory.
pub fn check_output_dir(output: &Path) -> Result<()> {
    if output.exists() && !output.is_dir() {
        bail!(
            "the 'output' path is not a valid directory: {}",
            output.display()
        );
    }
    Ok(())
}

/// Create the output directory (and parents) if it does not exist.
pub fn prepare_output_dir(output: &Path) -> Result<()> {
    check_output_dir(output)?;
    fs::create_dir_all(output)
        .with_context(|| format!("failed to create output directory {}", output.display()))
}

/// Render every template at every temperature into `output_dir`.
///
/// Files left over from an earlier run are overwritten. A template whose
/// outputs would replace a file already written by another template in
/// this run is skipped and recorded as a failure.
pub fn render_templates(
    templates: &[PathBuf],
    temps: &TemperatureSet,
    output_dir: &Path,
) -> Result<RenderReport> {
    prepare_output_dir(output_dir)?;

    println!(
        "\nRendering {} G-code files:",
        templates.len() * temps.len()
    );

    let mut report = RenderReport::default();
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();

    for path in templates {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                report.fail(
                    path,
                    anyhow::Error::new(e)
                        .context(format!("failed to read template {}", path.display())),
                );
                continue;
            }
        };

        let template = Template::from_path(path, contents);
        if let Err(e) = template.validate() {
            report.fail(path, e.into());
            continue;
        }

        let mut rendered = Vec::with_capacity(temps.len());
        for temp in temps {
            match template.expand(temp) {
                Ok(output) => rendered.push((temp, output)),
                Err(e) => {
                    report.fail(path, e.into());
                    break;
                }
            }
        }
        if rendered.len() != temps.len() {
            continue;
        }

        let clash = rendered.iter().find_map(|(_, output)| {
            let target = output_dir.join(&output.filename);
            claimed.get(&target).map(|owner| (target, owner.clone()))
        });
        if let Some((target, owner)) = clash {
            report.fail(
                path,
                anyhow!(
                    "{} would overwrite {} already rendered from {}",
                    path.display(),
                    target.display(),
                    owner.display()
                ),
            );
            continue;
        }

        for (temp, output) in rendered {
            let target = output_dir.join(&output.filename);
            claimed.insert(target.clone(), path.clone());

            if let Err(e) = fs::write(&target, &output.contents) {
                report.fail(
                    path,
                    anyhow::Error::new(e).context(format!("failed to write {}", target.display())),
                );
                continue;
            }

            println!("  {temp}C for {}", output.filename);
            tracing::info!(path = %target.display(), temp, "wrote G-code file");
            report.written.push(target);
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_check_output_dir_rejects_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("not_a_dir");
        fs::write(&file, "").unwrap();

        assert!(check_output_dir(&file).is_err());
        assert!(check_output_dir(dir.path()).is_ok());
        assert!(check_output_dir(&dir.path().join("missing")).is_ok());
    }

    #[test]
    fn test_prepare_output_dir_creates_parents() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");

        prepare_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_exit_status() {
        let mut report = RenderReport::default();
        report.written.push(PathBuf::from("out/a_200C.gcode"));
        assert_eq!(report.exit_status(), 0);

        report.fail(Path::new("t/b.gtemplate"), anyhow!("missing placeholder"));
        assert!(!report.is_success());
        assert_eq!(report.exit_status(), 1);
    }
}
