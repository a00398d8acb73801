//! Validation of metric-definition files
//!
//! # Implementation Model
//!
//! Validation never stops at the first problem. Every check appends [`Diagnostic`]s to a
//! [`ValidationReport`] that is threaded through the whole pass, and the outcome for a file is
//! simply whether any error-severity diagnostic was recorded.
//!
//! A file is validated in three steps:
//!
//! 1. Load and parse. A missing, blank, non-array or empty file yields `EmptyOrMissing`, invalid
//!    JSON yields `ParseError`, and either ends validation of that file.
//! 2. File-level uniqueness: one `DuplicateMetricName` or `DuplicateId` per repeated value.
//! 3. Per-record checks driven by the schema table in [`crate::schema`], including the nested
//!    threshold blocks. Within a single property a type error suppresses the value checks.
//!
//! Severities that are a matter of taste (threshold-kind presence, numeric threshold values)
//! are governed by a [`ValidationPolicy`].

mod diagnostic;
mod file;
mod policy;
mod record;
mod report;
mod severity;
mod suggest;
mod thresholds;
mod uniqueness;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use file::validate_file;
pub use policy::ValidationPolicy;
pub use report::ValidationReport;
pub use severity::Severity;
pub use uniqueness::find_duplicates;
