//! Integration tests for the `validate` command.

mod common;

use common::{TestHost, fixture, temp_root};
use std::fs;

#[test]
fn test_clean_files_pass() {
    let mut host = TestHost::new();
    let result = metric_lint_lib::run(
        &mut host,
        [
            "metric-lint",
            "validate",
            &fixture("clean/compute/virtual-machines/metrics.json"),
            &fixture("clean/storage/metrics.json"),
            "--format",
            "plain",
            "--color",
            "never",
        ],
    );

    assert!(result.is_ok(), "validate should succeed: {result:?}");
    assert_eq!(host.exit_code, None, "{}", host.output_str());

    let output = host.output_str();
    assert_eq!(output.matches(" passed (").count(), 2);
    assert!(output.contains("(2 definitions, 0 errors, 0 warnings)"));
    assert!(output.contains("All 2 files passed validation"));
}

#[test]
fn test_invalid_file_reports_every_problem() {
    let mut host = TestHost::new();
    let result = metric_lint_lib::run(
        &mut host,
        ["metric-lint", "--format", "plain", "--color", "never", "validate", &fixture("invalid/metrics.json")],
    );

    assert!(result.is_ok());
    assert_eq!(host.exit_code, Some(1));

    let output = host.output_str();
    for code in [
        "DuplicateMetricName",
        "DuplicateId",
        "InvalidValue",
        "InvalidTimeGrain",
        "InvalidSchema",
        "MissingRequiredThreshold",
        "InvalidSensitivity",
    ] {
        assert!(output.contains(code), "expected {code} in:\n{output}");
    }
    assert!(output.contains("failed (2 definitions"));
    assert!(host.error_str().contains("1 of 1 files failed validation"));
}

#[test]
fn test_github_annotations_from_environment() {
    let mut host = TestHost::new();
    host.env.push(("GITHUB_ACTIONS", "true"));

    let result = metric_lint_lib::run(&mut host, ["metric-lint", "validate", &fixture("invalid/metrics.json")]);

    assert!(result.is_ok());
    let output = host.output_str();
    assert!(output.lines().any(|line| line.starts_with("::error file=") && line.contains("title=InvalidTimeGrain::")));
}

#[test]
fn test_azure_annotations() {
    let mut host = TestHost::new();
    let result = metric_lint_lib::run(
        &mut host,
        ["metric-lint", "validate", "--format", "azure", &fixture("invalid/metrics.json")],
    );

    assert!(result.is_ok());
    assert!(host.output_str().contains("##vso[task.logissue type=error;sourcepath="));
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_missing_file_fails() {
    let (_tmp, root) = temp_root();
    let missing = root.join("metrics.json");

    let mut host = TestHost::new();
    let result = metric_lint_lib::run(
        &mut host,
        ["metric-lint", "validate", "--format", "plain", "--color", "never", missing.as_str()],
    );

    assert!(result.is_ok());
    assert_eq!(host.exit_code, Some(1));
    assert!(host.output_str().contains("EmptyOrMissing"));
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_explicit_config_changes_policy() {
    let (_tmp, root) = temp_root();
    let file = root.join("metrics.json");
    fs::write(
        &file,
        r#"[{"id":"m1","metricNamespace":"ns","metricName":"cpu","aggregationType":"Average","timeGrain":"PT5M","recommended":true}]"#,
    )
    .unwrap();
    let config = root.join("strict.toml");
    fs::write(&config, "threshold_kind_severity = \"error\"\n").unwrap();

    let mut lenient = TestHost::new();
    metric_lint_lib::run(&mut lenient, ["metric-lint", "validate", "--format", "plain", file.as_str()]).unwrap();
    assert_eq!(lenient.exit_code, None);
    assert!(lenient.output_str().contains("warning:"));

    let mut strict = TestHost::new();
    metric_lint_lib::run(
        &mut strict,
        ["metric-lint", "validate", "--format", "plain", "--config", config.as_str(), file.as_str()],
    )
    .unwrap();
    assert_eq!(strict.exit_code, Some(1));
    assert!(strict.output_str().contains("ThresholdKindMissing"));
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_bad_config_is_fatal() {
    let (_tmp, root) = temp_root();
    let config = root.join("bad.toml");
    fs::write(&config, "unknown_field = 1\n").unwrap();

    let mut host = TestHost::new();
    let result = metric_lint_lib::run(
        &mut host,
        ["metric-lint", "validate", "-c", config.as_str(), &fixture("clean/storage/metrics.json")],
    );

    assert!(result.is_err());
}
