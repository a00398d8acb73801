use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::aggregation::aggregate;
use camino::Utf8PathBuf;
use clap::Parser;
use std::io::Write;

const LOG_TARGET: &str = " aggregate";

#[derive(Parser, Debug)]
pub struct AggregateArgs {
    /// Directory searched recursively for metric-definition files
    #[arg(value_name = "SOURCE_ROOT")]
    pub source_root: Utf8PathBuf,

    /// File the combined array of definitions is written to
    #[arg(value_name = "OUTPUT")]
    pub output: Utf8PathBuf,
}

/// Combine every metric-definition file under the source root into one JSON array
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, or if any input cannot be read or
/// parsed, or if the output cannot be written
pub fn aggregate_definitions<H: Host>(host: &mut H, common_args: &CommonArgs, args: &AggregateArgs) -> Result<()> {
    let mut common = Common::new(host, common_args, &args.source_root)?;

    match aggregate(&args.source_root, &args.output, &common.config.definition_file_name) {
        Ok(aggregation) => {
            if aggregation.is_empty() {
                log::warn!(target: LOG_TARGET, "No definitions found under '{}'", args.source_root);
            }

            let _ = writeln!(
                common.host().output(),
                "Aggregated {} definitions from {} files into {}",
                aggregation.len(),
                aggregation.files().len(),
                args.output
            );
            Ok(())
        }
        Err(e) => {
            common.fail(format_args!("Aggregation failed: {e}"));
            Err(e)
        }
    }
}
