//! Common processing logic shared between the validate, aggregate and check commands.

use super::Host;
use super::config::Config;
use crate::Result;
use crate::reports::{AnnotationStyle, generate, write_diagnostic};
use crate::validation::{Diagnostic, ValidationReport};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use clap::ValueEnum;
use ohno::IntoAppError;
use std::io::Write;

const LOG_TARGET: &str = "    common";

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Shape of the diagnostic lines written to the output stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AnnotationFormat {
    /// Pick `github` or `azure` from the CI environment, otherwise `plain`
    Auto,

    /// GitHub Actions workflow commands
    Github,

    /// Azure Pipelines logging commands
    Azure,

    /// Human-readable lines
    Plain,
}

/// Options accepted by every command
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Path to configuration file (default is `metric-lint.toml` in the root being checked)
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Format used for diagnostics
    #[arg(long, value_name = "FORMAT", default_value = "auto", global = true)]
    pub format: AnnotationFormat,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

pub struct Common<'a, H: Host> {
    pub config: Config,
    host: &'a mut H,
    style: AnnotationStyle,
}

impl<'a, H: Host> Common<'a, H> {
    /// Set up logging, load the configuration found relative to `config_base`, and pick the output style
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded
    pub fn new(host: &'a mut H, args: &CommonArgs, config_base: &Utf8Path) -> Result<Self> {
        init_logging(args.log_level);

        let config = Config::load(config_base, args.config.as_ref())?;
        let style = resolve_style(&*host, args.format, args.color);
        log::debug!(target: LOG_TARGET, "Writing diagnostics as {style:?}");

        Ok(Self { config, host, style })
    }

    pub const fn host(&mut self) -> &mut H {
        self.host
    }

    /// Write a file's diagnostics and its summary line to the output stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the output stream cannot be written
    pub fn emit_report(&mut self, report: &ValidationReport) -> Result<()> {
        let mut text = String::new();
        generate(report, self.style, &mut text)?;
        self.write_output(&text)
    }

    /// Write diagnostics that do not belong to a single file's validation pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the output stream cannot be written
    pub fn emit_diagnostics(&mut self, diagnostics: &[Diagnostic]) -> Result<()> {
        let mut text = String::new();
        for diagnostic in diagnostics {
            write_diagnostic(diagnostic, self.style, &mut text)?;
        }
        self.write_output(&text)
    }

    fn write_output(&mut self, text: &str) -> Result<()> {
        self.host
            .output()
            .write_all(text.as_bytes())
            .into_app_err("writing diagnostics to the output stream")
    }

    /// Report a fatal failure to the error stream and exit with status 1.
    pub fn fail(&mut self, message: impl core::fmt::Display) {
        let _ = writeln!(self.host.error(), "❌ {message}");
        self.host.exit(1);
    }
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // A logger may already be installed when several commands run in one process (as in tests)
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}

fn resolve_style<H: Host>(host: &H, format: AnnotationFormat, color: ColorMode) -> AnnotationStyle {
    let format = match format {
        AnnotationFormat::Auto if host.env_var("GITHUB_ACTIONS").is_some() => AnnotationFormat::Github,
        AnnotationFormat::Auto if host.env_var("TF_BUILD").is_some() => AnnotationFormat::Azure,
        AnnotationFormat::Auto => AnnotationFormat::Plain,
        other => other,
    };

    match format {
        AnnotationFormat::Github => AnnotationStyle::GitHub,
        AnnotationFormat::Azure => AnnotationStyle::AzureDevOps,
        AnnotationFormat::Auto | AnnotationFormat::Plain => {
            let use_colors = match color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => {
                    use std::io::{IsTerminal, stdout};
                    stdout().is_terminal()
                }
            };
            AnnotationStyle::Plain { use_colors }
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;

    fn host_with(var: &str) -> TestHost {
        let mut host = TestHost::new();
        host.env.push((var.to_string(), "true".to_string()));
        host
    }

    #[test]
    fn test_auto_detects_github_actions() {
        let host = host_with("GITHUB_ACTIONS");
        assert_eq!(
            resolve_style(&host, AnnotationFormat::Auto, ColorMode::Never),
            AnnotationStyle::GitHub
        );
    }

    #[test]
    fn test_auto_detects_azure_pipelines() {
        let host = host_with("TF_BUILD");
        assert_eq!(
            resolve_style(&host, AnnotationFormat::Auto, ColorMode::Never),
            AnnotationStyle::AzureDevOps
        );
    }

    #[test]
    fn test_auto_falls_back_to_plain() {
        let host = TestHost::new();
        assert_eq!(
            resolve_style(&host, AnnotationFormat::Auto, ColorMode::Always),
            AnnotationStyle::Plain { use_colors: true }
        );
    }

    #[test]
    fn test_explicit_format_wins_over_environment() {
        let host = host_with("GITHUB_ACTIONS");
        assert_eq!(
            resolve_style(&host, AnnotationFormat::Plain, ColorMode::Never),
            AnnotationStyle::Plain { use_colors: false }
        );
        assert_eq!(
            resolve_style(&host, AnnotationFormat::Azure, ColorMode::Never),
            AnnotationStyle::AzureDevOps
        );
    }
}
