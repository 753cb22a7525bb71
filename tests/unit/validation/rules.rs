//! Unit tests for validation/rules.rs

use cagecleaner::algorithm::validation::{self, validate_inputs, ValidateArgs, ValidationIssue};
use cagecleaner::error::CleanerError;
use super::super::helpers::{binary_text, summary_text, write_file};

fn two_hit_binary() -> String {
    binary_text(&[
        ("Org one", "NZ_CP000001.1", 5.0, [2, 1]),
        ("Org two", "NZ_CP000002.1", 4.0, [1, 1]),
    ])
}

fn two_cluster_summary() -> String {
    summary_text(&[("Org one", "NZ_CP000001.1", 1), ("Org two", "NZ_CP000002.1", 2)])
}

#[test]
fn test_valid_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let binary = write_file(dir.path(), "binary.txt", &two_hit_binary());
    let summary = write_file(dir.path(), "summary.txt", &two_cluster_summary());
    let report = validate_inputs(&binary, &summary);
    assert!(report.is_ok(), "{}", report);
}

#[test]
fn test_missing_files_are_all_reported() {
    let dir = tempfile::tempdir().unwrap();
    let report = validate_inputs(&dir.path().join("b.txt"), &dir.path().join("s.txt"));
    assert_eq!(report.issues().len(), 2);
    assert!(report
        .issues()
        .iter()
        .all(|i| matches!(i, ValidationIssue::MissingFile { .. })));
}

#[test]
fn test_every_failed_rule_is_listed() {
    let dir = tempfile::tempdir().unwrap();
    let binary = write_file(
        dir.path(),
        "binary.txt",
        "Organism  Scaffold  Start  End  QBX1.1\nOrg one  NZ_CP000001.1  1  9  1\n",
    );
    let summary = write_file(dir.path(), "summary.txt", &two_cluster_summary());
    let report = validate_inputs(&binary, &summary);
    let issues = report.issues();

    assert!(issues.contains(&ValidationIssue::TooFewColumns { found: 5, required: 6 }));
    assert!(issues.contains(&ValidationIssue::MissingColumns {
        missing: vec!["Score".to_string()]
    }));
    assert!(issues.contains(&ValidationIssue::TooFewHits { found: 1, required: 2 }));
    assert!(issues.contains(&ValidationIssue::ClusterCountMismatch { hits: 1, clusters: 2 }));
    assert_eq!(issues.len(), 4);
    assert_eq!(report.to_string().lines().count(), 4);
}

#[test]
fn test_validate_command_error() {
    let dir = tempfile::tempdir().unwrap();
    let binary = write_file(dir.path(), "binary.txt", &two_hit_binary());
    let summary = write_file(dir.path(), "summary.txt", "nothing here\n");

    let err = validation::run(ValidateArgs { binary, summary }).unwrap_err();
    match err.downcast_ref::<CleanerError>() {
        Some(CleanerError::Validation(report)) => {
            assert_eq!(
                report.issues(),
                &[ValidationIssue::ClusterCountMismatch { hits: 2, clusters: 0 }]
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_validate_command_ok() {
    let dir = tempfile::tempdir().unwrap();
    let binary = write_file(dir.path(), "binary.txt", &two_hit_binary());
    let summary = write_file(dir.path(), "summary.txt", &two_cluster_summary());
    validation::run(ValidateArgs { binary, summary }).unwrap();
}
