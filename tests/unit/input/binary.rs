//! Unit tests for input/binary.rs

use cagecleaner::error::CleanerError;
use cagecleaner::input::binary::parse_binary_table;
use cagecleaner::input::read_binary_table;
use super::super::helpers::{binary_text, write_file, QUERY_GENES};

#[test]
fn test_parse_rows_and_query_genes() {
    let text = binary_text(&[
        ("Streptomyces sp. A1", "NZ_CP000001.1", 5.2, [2, 1]),
        ("Streptomyces coelicolor A3(2)", "CP000002.1", 3.0, [0, 1]),
    ]);
    let table = parse_binary_table(text.as_bytes(), "binary.txt").unwrap();
    assert_eq!(table.query_genes, QUERY_GENES.to_vec());
    assert_eq!(table.rows.len(), 2);

    let row = &table.rows[0];
    assert_eq!(row.organism, "Streptomyces sp. A1");
    assert_eq!(row.scaffold, "NZ_CP000001.1");
    assert_eq!(row.start, 1000);
    assert_eq!(row.end, 1900);
    assert_eq!(row.score, 5.2);
    assert_eq!(row.counts, vec![2, 1]);
    assert_eq!(row.line_no, 2);
    assert_eq!(table.rows[1].organism, "Streptomyces coelicolor A3(2)");
    assert_eq!(table.scaffolds(), vec!["NZ_CP000001.1", "CP000002.1"]);
}

#[test]
fn test_attribute_table_keeps_first_row_per_scaffold() {
    let text = binary_text(&[
        ("Org A", "NZ_CP000001.1", 5.0, [2, 1]),
        ("Org A", "NZ_CP000001.1", 1.0, [1, 1]),
    ]);
    let table = parse_binary_table(text.as_bytes(), "binary.txt").unwrap();
    let attributes = table.attribute_table().unwrap();
    assert_eq!(attributes.len(), 1);
    let hit = attributes.get("NZ_CP000001.1").unwrap();
    assert_eq!(hit.score, 5.0);
    assert_eq!(hit.features.0, vec![2, 1]);
    assert_eq!(table.line_index()["NZ_CP000001.1"], table.rows[0].raw);
}

#[test]
fn test_missing_score_column() {
    let text = "Organism  Scaffold  Start  End  QBX1.1\nOrg A  CP1.1  1  9  2\n";
    let err = parse_binary_table(text.as_bytes(), "binary.txt").unwrap_err();
    match err {
        CleanerError::MissingColumn { column, .. } => assert_eq!(column, "Score"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_query_gene_columns() {
    let text = "Organism  Scaffold  Start  End  Score\nOrg A  CP1.1  1  9  2.0\n";
    let err = parse_binary_table(text.as_bytes(), "binary.txt").unwrap_err();
    assert!(matches!(err, CleanerError::MissingColumn { .. }));
}

#[test]
fn test_bad_score_reports_line() {
    let text = "Organism  Scaffold  Start  End  Score  QBX1.1\nOrg A  CP1.1  1  9  2.0  1\nOrg B  CP2.1  1  9  high  1\n";
    let err = parse_binary_table(text.as_bytes(), "binary.txt").unwrap_err();
    assert!(matches!(err, CleanerError::InputFormat { line: 3, .. }));
}

#[test]
fn test_wrong_column_count() {
    let text = "Organism  Scaffold  Start  End  Score  QBX1.1\nOrg A  CP1.1  1  9  2.0\n";
    let err = parse_binary_table(text.as_bytes(), "binary.txt").unwrap_err();
    assert!(matches!(err, CleanerError::InputFormat { line: 2, .. }));
}

#[test]
fn test_empty_table() {
    let err = parse_binary_table("\n\n".as_bytes(), "binary.txt").unwrap_err();
    assert!(matches!(err, CleanerError::InputFormat { .. }));
}

#[test]
fn test_read_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "binary.txt",
        &binary_text(&[("Org A", "CP1.1", 1.5, [1, 0])]),
    );
    let table = read_binary_table(&path).unwrap();
    assert_eq!(table.rows.len(), 1);

    let err = read_binary_table(&dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, CleanerError::Io { .. }));
}
