use super::{Diagnostic, DiagnosticKind, Severity};
use camino::{Utf8Path, Utf8PathBuf};

/// Every finding produced while validating one input.
///
/// Checks never stop early; they append to the report and validation of the input
/// fails if any error-severity diagnostic was recorded.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    file: Option<Utf8PathBuf>,
    record_count: usize,
    diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    #[must_use]
    pub const fn new(file: Option<Utf8PathBuf>) -> Self {
        Self {
            file,
            record_count: 0,
            diagnostics: Vec::new(),
        }
    }

    #[must_use]
    pub fn file(&self) -> Option<&Utf8Path> {
        self.file.as_deref()
    }

    /// Number of metric definitions that were examined.
    #[must_use]
    pub const fn record_count(&self) -> usize {
        self.record_count
    }

    pub(crate) const fn set_record_count(&mut self, count: usize) {
        self.record_count = count;
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(Diagnostic::is_error)
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Warning).count()
    }

    /// Codes of all recorded diagnostics, in the order they were found.
    #[cfg(test)]
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.diagnostics.iter().map(|d| d.kind.code())
    }

    /// Record a diagnostic that concerns the input as a whole.
    pub fn push_file_level(&mut self, kind: DiagnosticKind) {
        let severity = kind.default_severity();
        self.push(Diagnostic::new(severity, kind));
    }

    /// Record a diagnostic, attaching this report's file to it.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        let diagnostic = if diagnostic.file.is_none() {
            diagnostic.in_file(self.file.as_deref())
        } else {
            diagnostic
        };

        self.diagnostics.push(diagnostic);
    }

    /// Start recording diagnostics on behalf of one metric definition.
    pub const fn record_scope<'r>(&'r mut self, index: usize, metric_name: Option<&'r str>) -> RecordScope<'r> {
        RecordScope {
            report: self,
            index,
            metric_name,
        }
    }
}

/// Tags diagnostics with the definition they were found in.
#[derive(Debug)]
pub struct RecordScope<'r> {
    report: &'r mut ValidationReport,
    index: usize,
    metric_name: Option<&'r str>,
}

impl RecordScope<'_> {
    /// Record a diagnostic with its default severity.
    pub fn emit(&mut self, kind: DiagnosticKind) {
        let severity = kind.default_severity();
        self.emit_as(severity, kind);
    }

    pub fn emit_as(&mut self, severity: Severity, kind: DiagnosticKind) {
        self.report
            .push(Diagnostic::new(severity, kind).at_record(self.index, self.metric_name));
    }
}
