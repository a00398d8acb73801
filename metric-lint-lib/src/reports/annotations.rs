use crate::Result;
use crate::validation::{Diagnostic, Severity, ValidationReport};
use core::fmt::Write;
use owo_colors::OwoColorize;

/// How diagnostics are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationStyle {
    /// GitHub Actions workflow commands (`::error file=...::message`)
    GitHub,

    /// Azure Pipelines logging commands (`##vso[task.logissue ...]message`)
    AzureDevOps,

    /// Human-readable lines, optionally colored
    Plain { use_colors: bool },
}

/// Write every diagnostic of a report followed by a one-line summary.
pub fn generate<W: Write>(report: &ValidationReport, style: AnnotationStyle, writer: &mut W) -> Result<()> {
    for diagnostic in report.diagnostics() {
        write_diagnostic(diagnostic, style, writer)?;
    }

    write_summary(report, style, writer)
}

pub fn write_diagnostic<W: Write>(diagnostic: &Diagnostic, style: AnnotationStyle, writer: &mut W) -> Result<()> {
    let code = diagnostic.kind.code();
    match style {
        AnnotationStyle::GitHub => {
            let command = match diagnostic.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            write!(writer, "::{command} ")?;
            if let Some(file) = &diagnostic.file {
                write!(writer, "file={},", escape_github_property(file.as_str()))?;
            }
            writeln!(writer, "title={code}::{}", escape_github_data(&diagnostic.to_string()))?;
        }

        AnnotationStyle::AzureDevOps => {
            write!(writer, "##vso[task.logissue type={}", diagnostic.severity)?;
            if let Some(file) = &diagnostic.file {
                write!(writer, ";sourcepath={}", escape_azure_property(file.as_str()))?;
            }
            writeln!(writer, ";code={code}]{}", escape_azure_data(&diagnostic.to_string()))?;
        }

        AnnotationStyle::Plain { use_colors } => {
            let label = diagnostic.severity.to_string();
            let label = match (use_colors, diagnostic.severity) {
                (false, _) => label,
                (true, Severity::Error) => label.red().bold().to_string(),
                (true, Severity::Warning) => label.yellow().bold().to_string(),
            };
            write!(writer, "{label}: ")?;
            if let Some(file) = &diagnostic.file {
                write!(writer, "{file}: ")?;
            }
            writeln!(writer, "{diagnostic}")?;
        }
    }

    Ok(())
}

fn write_summary<W: Write>(report: &ValidationReport, style: AnnotationStyle, writer: &mut W) -> Result<()> {
    let label = report.file().map_or("<input>", |f| f.as_str());
    let counts = format!(
        "{} definitions, {} errors, {} warnings",
        report.record_count(),
        report.error_count(),
        report.warning_count()
    );

    let (mark, verdict) = if report.is_valid() { ("✔️", "passed") } else { ("🗙", "failed") };
    let verdict = match (style, report.is_valid()) {
        (AnnotationStyle::Plain { use_colors: true }, true) => verdict.green().bold().to_string(),
        (AnnotationStyle::Plain { use_colors: true }, false) => verdict.red().bold().to_string(),
        _ => verdict.to_string(),
    };

    writeln!(writer, "{mark} {label} {verdict} ({counts})")?;
    Ok(())
}

fn escape_github_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_github_property(s: &str) -> String {
    escape_github_data(s).replace(':', "%3A").replace(',', "%2C")
}

fn escape_azure_data(s: &str) -> String {
    s.replace('%', "%AZP25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_azure_property(s: &str) -> String {
    escape_azure_data(s).replace(';', "%3B").replace(']', "%5D")
}
