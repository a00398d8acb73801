use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::aggregation::{Aggregation, same_file};
use crate::discovery::{check_lowercase_directories, find_definition_files};
use crate::validation::{ValidationReport, validate_file};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use std::io::Write;

const LOG_TARGET: &str = "     check";

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Root directory searched recursively for metric-definition files
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: Utf8PathBuf,

    /// Also write the combined array of definitions to this file
    #[arg(long, value_name = "PATH")]
    pub combined_output: Option<Utf8PathBuf>,
}

/// Run every check over a tree of metric-definition files
///
/// The checks are, in order: directory naming, aggregation (written out when a combined output is
/// requested), cross-file `id` uniqueness, then validation of each discovered file. All of them
/// run even when an earlier one reports errors, and the exit status is set to 1 if any did.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, the tree cannot be walked, or the
/// output stream cannot be written
pub fn check_tree<H: Host>(host: &mut H, common_args: &CommonArgs, args: &CheckArgs) -> Result<()> {
    let mut common = Common::new(host, common_args, &args.root)?;
    let policy = common.config.policy();
    let file_name = common.config.definition_file_name.clone();
    let mut failures = 0;

    if common.config.require_lowercase_directories {
        let diagnostics = check_lowercase_directories(&args.root)?;
        log::info!(target: LOG_TARGET, "Found {} directories that are not lowercase", diagnostics.len());
        if !diagnostics.is_empty() {
            failures += diagnostics.len();
            common.emit_diagnostics(&diagnostics)?;
        }
    }

    let files = find_definition_files(&args.root, &file_name)?;
    if files.is_empty() {
        let _ = writeln!(common.host().output(), "No '{file_name}' files found under {}", args.root);
    }

    let is_combined_output = |file: &Utf8Path| args.combined_output.as_deref().is_some_and(|output| same_file(file, output));
    let inputs = files.iter().filter(|file| !is_combined_output(file.as_path())).cloned();

    match Aggregation::from_files(inputs) {
        Ok(aggregation) => {
            if let Some(output) = &args.combined_output {
                aggregation.write(output)?;
            }

            let attributed_to = args.combined_output.clone().unwrap_or_else(|| args.root.clone());
            let mut cross_file = ValidationReport::new(Some(attributed_to));
            aggregation.check_unique_ids(&mut cross_file);
            if !cross_file.diagnostics().is_empty() {
                failures += cross_file.error_count();
                common.emit_diagnostics(cross_file.diagnostics())?;
            }
        }

        // The offending file is reported again below with a precise diagnostic
        Err(e) => {
            log::warn!(target: LOG_TARGET, "Skipping cross-file checks: {e}");
            let _ = writeln!(common.host().error(), "Skipping cross-file checks: {e}");
            failures += 1;
        }
    }

    for file in files.iter().filter(|file| !is_combined_output(file.as_path())) {
        let report = validate_file(file, &policy);
        if !report.is_valid() {
            failures += 1;
        }
        common.emit_report(&report)?;
    }

    if failures > 0 {
        common.fail(format_args!("Check of {} failed", args.root));
    } else {
        let _ = writeln!(common.host().output(), "Checked {} files under {}", files.len(), args.root);
    }

    Ok(())
}
