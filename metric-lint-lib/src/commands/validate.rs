use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::validation::validate_file;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use std::io::Write;

const LOG_TARGET: &str = "  validate";

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Metric-definition files to validate
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<Utf8PathBuf>,
}

/// Validate each named file independently and report every diagnostic found
///
/// Sets the exit status to 1 when any file fails validation.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the output stream cannot be written
pub fn validate_files<H: Host>(host: &mut H, common_args: &CommonArgs, args: &ValidateArgs) -> Result<()> {
    let mut common = Common::new(host, common_args, Utf8Path::new("."))?;
    let policy = common.config.policy();

    let mut failed = 0;
    for file in &args.files {
        log::info!(target: LOG_TARGET, "Validating '{file}'");
        let report = validate_file(file, &policy);
        if !report.is_valid() {
            failed += 1;
        }
        common.emit_report(&report)?;
    }

    if failed > 0 {
        common.fail(format!("{failed} of {} files failed validation", args.files.len()));
    } else {
        let _ = writeln!(common.host().output(), "All {} files passed validation", args.files.len());
    }

    Ok(())
}
