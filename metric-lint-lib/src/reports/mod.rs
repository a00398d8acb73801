//! Rendering of validation results
//!
//! Diagnostics are rendered one per line in a format chosen by an [`AnnotationStyle`]:
//! - **GitHub**: workflow commands that GitHub Actions turns into file annotations
//! - **Azure DevOps**: `##vso` logging commands understood by Azure Pipelines
//! - **Plain**: human-readable lines with optional ANSI colors
//!
//! Every report ends with a summary line giving the verdict and the error and warning counts.

mod annotations;

pub use annotations::{AnnotationStyle, generate, write_diagnostic};
