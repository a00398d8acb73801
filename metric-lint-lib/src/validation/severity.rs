use serde::{Deserialize, Serialize};
use strum::Display;

/// How much a diagnostic matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    /// Informational; never fails validation.
    Warning,

    /// Fails validation of the file it was found in.
    Error,
}
