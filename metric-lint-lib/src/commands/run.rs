//! Command dispatch logic for metric-lint

use super::{
    AggregateArgs, CheckArgs, CommonArgs, InitArgs, ValidateArgs, aggregate_definitions, check_tree, init_config, validate_files,
};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "metric-lint", version, author, long_about = None)]
#[command(about = "Validate and aggregate monitoring metric-definition files")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: LintSubcommand,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Subcommand, Debug)]
enum LintSubcommand {
    /// Validate individual metric-definition files
    Validate(ValidateArgs),
    /// Combine every metric-definition file under a directory into one file
    Aggregate(AggregateArgs),
    /// Run every check over a directory of metric-definition files
    Check(CheckArgs),
    /// Generate a default configuration file
    Init(InitArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);

    match &cli.command {
        LintSubcommand::Validate(validate_args) => validate_files(host, &cli.common, validate_args),
        LintSubcommand::Aggregate(aggregate_args) => aggregate_definitions(host, &cli.common, aggregate_args),
        LintSubcommand::Check(check_args) => check_tree(host, &cli.common, check_args),
        LintSubcommand::Init(init_args) => init_config(host, init_args),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["metric-lint", "check", "src", "--format", "github", "--combined-output", "all.json"]).unwrap();
        assert_eq!(cli.common.format, super::super::common::AnnotationFormat::Github);
        let LintSubcommand::Check(check) = cli.command else {
            panic!("expected the check subcommand");
        };
        assert_eq!(check.root, "src");
        assert_eq!(check.combined_output.as_deref().map(|p| p.as_str()), Some("all.json"));
    }

    #[test]
    fn test_validate_requires_a_file() {
        assert!(Cli::try_parse_from(["metric-lint", "validate"]).is_err());
    }
}
