//! Combining every metric-definition file under a root into one array.
//!
//! The combined array is what cross-file checks (such as global `id` uniqueness) run against.
//! Files are read in lexicographic path order so the output is stable across platforms. Any
//! input that cannot be read or is not a JSON array aborts the whole aggregation.

use crate::Result;
use crate::discovery::find_definition_files;
use crate::json_utils::strip_bom;
use crate::schema::ID;
use crate::validation::{Diagnostic, DiagnosticKind, Severity, ValidationReport, find_duplicates};
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, bail};
use serde_json::Value;
use std::fs;

const LOG_TARGET: &str = " aggregate";

/// A metric definition together with the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedDefinition {
    pub source: Utf8PathBuf,
    pub definition: Value,
}

/// The concatenation of several metric-definition files.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    files: Vec<Utf8PathBuf>,
    definitions: Vec<SourcedDefinition>,
}

impl Aggregation {
    /// Collect every file named `file_name` under `root`, skipping `exclude` if it is among them.
    pub fn collect(root: &Utf8Path, file_name: &str, exclude: Option<&Utf8Path>) -> Result<Self> {
        let files = find_definition_files(root, file_name)?
            .into_iter()
            .filter(|file| exclude.is_none_or(|excluded| !same_file(file, excluded)));

        Self::from_files(files)
    }

    /// Concatenate the given files in order.
    pub fn from_files(files: impl IntoIterator<Item = Utf8PathBuf>) -> Result<Self> {
        let mut aggregation = Self::default();
        for file in files {
            aggregation.add_file(file)?;
        }

        Ok(aggregation)
    }

    fn add_file(&mut self, file: Utf8PathBuf) -> Result<()> {
        let text = fs::read_to_string(&file).into_app_err_with(|| format!("reading metric definitions from '{file}'"))?;
        let root: Value =
            serde_json::from_str(strip_bom(&text)).into_app_err_with(|| format!("parsing metric definitions in '{file}'"))?;

        let Value::Array(definitions) = root else {
            bail!("'{file}' does not contain a JSON array of metric definitions");
        };

        log::debug!(target: LOG_TARGET, "Adding {} definitions from '{file}'", definitions.len());

        self.definitions
            .extend(definitions.into_iter().map(|definition| SourcedDefinition {
                source: file.clone(),
                definition,
            }));
        self.files.push(file);
        Ok(())
    }

    #[must_use]
    pub fn files(&self) -> &[Utf8PathBuf] {
        &self.files
    }

    #[cfg(test)]
    pub fn definitions(&self) -> &[SourcedDefinition] {
        &self.definitions
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Serialize the combined array as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        let combined: Vec<&Value> = self.definitions.iter().map(|d| &d.definition).collect();
        serde_json::to_string_pretty(&combined).into_app_err("serializing combined metric definitions")
    }

    /// Write the combined array to `output`. Parent directories are not created.
    pub fn write(&self, output: &Utf8Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(output, json).into_app_err_with(|| format!("writing combined metric definitions to '{output}'"))?;
        log::info!(target: LOG_TARGET, "Wrote {} definitions from {} files to '{output}'", self.len(), self.files.len());
        Ok(())
    }

    /// Report one `DuplicateId` for every id used more than once across all files.
    pub fn check_unique_ids(&self, report: &mut ValidationReport) {
        let ids = self
            .definitions
            .iter()
            .filter_map(|d| d.definition.get(ID).and_then(Value::as_str));

        for (id, occurrences) in find_duplicates(ids) {
            let sources: Vec<&str> = self
                .definitions
                .iter()
                .filter(|d| d.definition.get(ID).and_then(Value::as_str) == Some(id))
                .map(|d| d.source.as_str())
                .collect();
            log::debug!(target: LOG_TARGET, "id '{id}' appears in: {}", sources.join(", "));

            report.push(Diagnostic::new(
                Severity::Error,
                DiagnosticKind::DuplicateId {
                    id: id.to_string(),
                    occurrences,
                },
            ));
        }
    }
}

/// Compare paths by their canonical form when both exist, falling back to the paths as given.
pub(crate) fn same_file(a: &Utf8Path, b: &Utf8Path) -> bool {
    match (a.canonicalize_utf8(), b.canonicalize_utf8()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Aggregate every `file_name` under `root` and write the combined array to `output`.
pub fn aggregate(root: &Utf8Path, output: &Utf8Path, file_name: &str) -> Result<Aggregation> {
    let aggregation = Aggregation::collect(root, file_name, Some(output))?;
    aggregation.write(output)?;
    Ok(aggregation)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_root() -> (tempfile::TempDir, Utf8PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        (tmp, root)
    }

    fn write_definitions(root: &Utf8Path, dir: &str, ids: &[&str]) {
        let definitions: Vec<Value> = ids
            .iter()
            .map(|id| json!({"id": id, "metricName": format!("metric-{id}")}))
            .collect();
        fs::create_dir_all(root.join(dir)).unwrap();
        fs::write(root.join(dir).join("metrics.json"), serde_json::to_string(&definitions).unwrap()).unwrap();
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_concatenates_in_path_order() {
        let (_tmp, root) = temp_root();
        write_definitions(&root, "storage", &["s1", "s2"]);
        write_definitions(&root, "compute", &["c1"]);

        let aggregation = Aggregation::collect(&root, "metrics.json", None).unwrap();
        let ids: Vec<_> = aggregation
            .definitions()
            .iter()
            .map(|d| d.definition["id"].as_str().unwrap())
            .collect();

        assert_eq!(ids, ["c1", "s1", "s2"]);
        assert_eq!(aggregation.files().len(), 2);
        assert_eq!(aggregation.definitions()[0].source, root.join("compute/metrics.json"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_tree_without_definitions_is_empty() {
        let (_tmp, root) = temp_root();
        fs::create_dir_all(root.join("compute")).unwrap();

        let aggregation = Aggregation::collect(&root, "metrics.json", None).unwrap();
        assert!(aggregation.is_empty());
        assert_eq!(aggregation.len(), 0);
        assert!(aggregation.files().is_empty());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_disjoint_ids_have_no_duplicates() {
        let (_tmp, root) = temp_root();
        write_definitions(&root, "compute", &["c1", "c2"]);
        write_definitions(&root, "storage", &["s1"]);

        let aggregation = Aggregation::collect(&root, "metrics.json", None).unwrap();
        let mut report = ValidationReport::new(None);
        aggregation.check_unique_ids(&mut report);

        assert!(report.diagnostics().is_empty());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_shared_id_is_reported_once() {
        let (_tmp, root) = temp_root();
        write_definitions(&root, "compute", &["c1", "shared"]);
        write_definitions(&root, "storage", &["shared", "s1"]);

        let aggregation = Aggregation::collect(&root, "metrics.json", None).unwrap();
        let mut report = ValidationReport::new(None);
        aggregation.check_unique_ids(&mut report);

        assert_eq!(report.diagnostics().len(), 1);
        assert_eq!(
            report.diagnostics()[0].kind,
            DiagnosticKind::DuplicateId {
                id: "shared".into(),
                occurrences: 2
            }
        );
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_aggregate_writes_combined_array() {
        let (_tmp, root) = temp_root();
        write_definitions(&root, "compute", &["c1"]);
        write_definitions(&root, "storage", &["s1"]);
        let output = root.join("combined.json");

        let aggregation = aggregate(&root, &output, "metrics.json").unwrap();
        assert_eq!(aggregation.len(), 2);

        let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written, json!([{"id": "c1", "metricName": "metric-c1"}, {"id": "s1", "metricName": "metric-s1"}]));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_output_named_like_inputs_is_excluded() {
        let (_tmp, root) = temp_root();
        write_definitions(&root, "compute", &["c1"]);
        let output = root.join("metrics.json");
        fs::write(&output, r#"[{"id": "stale"}]"#).unwrap();

        let aggregation = aggregate(&root, &output, "metrics.json").unwrap();
        assert_eq!(aggregation.len(), 1);
        assert_eq!(aggregation.files(), [root.join("compute/metrics.json")]);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_malformed_input_is_fatal() {
        let (_tmp, root) = temp_root();
        write_definitions(&root, "compute", &["c1"]);
        fs::create_dir_all(root.join("storage")).unwrap();
        fs::write(root.join("storage/metrics.json"), "[{").unwrap();
        let output = root.join("combined.json");

        assert!(aggregate(&root, &output, "metrics.json").is_err());
        assert!(!output.exists());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_non_array_input_is_fatal() {
        let (_tmp, root) = temp_root();
        fs::write(root.join("metrics.json"), r#"{"id": "c1"}"#).unwrap();

        assert!(Aggregation::collect(&root, "metrics.json", None).is_err());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_unwritable_output_is_an_error() {
        let (_tmp, root) = temp_root();
        write_definitions(&root, "compute", &["c1"]);
        let output = root.join("missing-dir/combined.json");

        assert!(aggregate(&root, &output, "metrics.json").is_err());
    }
}
