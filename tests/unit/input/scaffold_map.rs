//! Unit tests for input/scaffold_map.rs

use cagecleaner::error::CleanerError;
use cagecleaner::input::ScaffoldMap;
use super::super::helpers::{scaffold_map_text, GCF_1, GCF_2};

#[test]
fn test_write_then_read_file() {
    let mut map = ScaffoldMap::new();
    map.insert("NZ_CP000003.1", GCF_2).unwrap();
    map.insert("NZ_CP000001.1", GCF_1).unwrap();
    map.insert("NZ_CP000002.1", GCF_1).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scaffold_map.tsv");
    map.write_tsv_file(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        scaffold_map_text(&[
            ("NZ_CP000001.1", GCF_1),
            ("NZ_CP000002.1", GCF_1),
            ("NZ_CP000003.1", GCF_2),
        ])
    );
    assert_eq!(ScaffoldMap::read_tsv(&path).unwrap(), map);
}

#[test]
fn test_conflicting_rows() {
    let text = scaffold_map_text(&[("NZ_CP000001.1", GCF_1), ("NZ_CP000001.1", GCF_2)]);
    let err = ScaffoldMap::parse_tsv(text.as_bytes(), "map.tsv").unwrap_err();
    assert!(matches!(err, CleanerError::InputFormat { line: 3, .. }));
}

#[test]
fn test_hits_by_assembly() {
    let text = scaffold_map_text(&[("b", GCF_1), ("a", GCF_1), ("c", GCF_2)]);
    let map = ScaffoldMap::parse_tsv(text.as_bytes(), "map.tsv").unwrap();
    let by_assembly = map.hits_by_assembly();
    assert_eq!(by_assembly[GCF_1], vec!["a", "b"]);
    assert_eq!(by_assembly[GCF_2], vec!["c"]);
}
