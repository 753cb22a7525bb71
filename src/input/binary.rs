//! cblaster binary table reader
//!
//! The binary table is a space-aligned text table: columns are separated by
//! runs of two or more whitespace characters (or a tab), since organism names
//! contain single spaces. Besides the fixed `Organism`, `Scaffold`, `Start`,
//! `End` and `Score` columns every column holds the homolog count of one
//! query gene.

use regex::Regex;
use rustc_hash::FxHashMap;
use std::io::BufRead;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::common::{HitAttributeTable, HitAttributes, HitId};
use crate::error::{CleanerError, Result};

use super::open_text;

pub const ORGANISM: &str = "Organism";
pub const SCAFFOLD: &str = "Scaffold";
pub const START: &str = "Start";
pub const END: &str = "End";
pub const SCORE: &str = "Score";

/// Columns every cblaster binary table carries
pub const REQUIRED_COLUMNS: [&str; 5] = [ORGANISM, SCAFFOLD, START, END, SCORE];

const TABLE_NAME: &str = "cblaster binary table";

static COLUMN_SEPARATOR: OnceLock<Regex> = OnceLock::new();

fn column_separator() -> &'static Regex {
    COLUMN_SEPARATOR.get_or_init(|| Regex::new(r"\s{2,}|\t").expect("valid column separator"))
}

/// Split one table line into its cells
pub fn split_columns(line: &str) -> Vec<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    column_separator().split(trimmed).collect()
}

/// One hit row of the binary table
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryRow {
    /// 1-based line number in the input
    pub line_no: usize,
    pub organism: String,
    pub scaffold: HitId,
    pub start: u64,
    pub end: u64,
    pub score: f64,
    /// Homolog counts in query gene column order
    pub counts: Vec<u32>,
    /// The line as it appeared in the input
    pub raw: String,
}

/// Parsed cblaster binary table
#[derive(Debug, Clone)]
pub struct BinaryTable {
    pub header: String,
    pub columns: Vec<String>,
    pub query_genes: Vec<String>,
    pub rows: Vec<BinaryRow>,
}

impl BinaryTable {
    /// Scaffold IDs in input order
    pub fn scaffolds(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.scaffold.as_str()).collect()
    }

    /// Feature vectors and scores keyed by scaffold.
    ///
    /// A scaffold carrying several hits is represented by its first row.
    pub fn attribute_table(&self) -> Result<HitAttributeTable> {
        let mut table = HitAttributeTable::new(self.query_genes.clone())?;
        for row in &self.rows {
            let inserted = table.insert(HitAttributes::new(
                row.scaffold.clone(),
                row.counts.clone(),
                row.score,
            ))?;
            if !inserted {
                warn!(
                    "Scaffold {} has more than one hit (line {}); keeping the first",
                    row.scaffold, row.line_no
                );
            }
        }
        Ok(table)
    }

    /// First input line of each scaffold, for writing the cleaned table
    pub fn line_index(&self) -> FxHashMap<&str, &str> {
        let mut index = FxHashMap::default();
        for row in &self.rows {
            index.entry(row.scaffold.as_str()).or_insert(row.raw.as_str());
        }
        index
    }
}

fn parse_count(cell: &str) -> Option<u32> {
    if let Ok(n) = cell.parse::<u32>() {
        return Some(n);
    }
    // cblaster occasionally writes integral counts as floats ("2.0")
    let f = cell.parse::<f64>().ok()?;
    if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 {
        Some(f as u32)
    } else {
        None
    }
}

/// Parse a binary table from any buffered reader.
///
/// `input` names the source in error messages.
pub fn parse_binary_table<R: BufRead>(reader: R, input: &str) -> Result<BinaryTable> {
    let mut lines = reader.lines().enumerate();

    // Header: first non-blank line
    let (header_no, header) = loop {
        match lines.next() {
            Some((idx, line)) => {
                let line = line.map_err(|e| CleanerError::input_format(input, idx + 1, e.to_string()))?;
                if !line.trim().is_empty() {
                    break (idx + 1, line);
                }
            }
            None => return Err(CleanerError::input_format(input, 0, "empty binary table")),
        }
    };

    let columns: Vec<String> = split_columns(&header).into_iter().map(String::from).collect();
    let position = |name: &str| -> Result<usize> {
        columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| CleanerError::missing_column(TABLE_NAME, name))
    };
    let organism_col = position(ORGANISM)?;
    let scaffold_col = position(SCAFFOLD)?;
    let start_col = position(START)?;
    let end_col = position(END)?;
    let score_col = position(SCORE)?;

    let gene_cols: Vec<usize> = (0..columns.len())
        .filter(|i| !REQUIRED_COLUMNS.contains(&columns[*i].as_str()))
        .collect();
    if gene_cols.is_empty() {
        return Err(CleanerError::missing_column(TABLE_NAME, "<query gene count columns>"));
    }
    let query_genes: Vec<String> = gene_cols.iter().map(|&i| columns[i].clone()).collect();
    debug!(
        "Binary table header at line {}: {} query gene columns",
        header_no,
        query_genes.len()
    );

    let mut rows = Vec::new();
    for (idx, line) in lines {
        let line_no = idx + 1;
        let line = line.map_err(|e| CleanerError::input_format(input, line_no, e.to_string()))?;
        let cells = split_columns(&line);
        if cells.is_empty() {
            continue;
        }
        if cells.len() != columns.len() {
            return Err(CleanerError::input_format(
                input,
                line_no,
                format!("expected {} columns, found {}", columns.len(), cells.len()),
            ));
        }

        let bad = |column: &str, value: &str| {
            CleanerError::input_format(input, line_no, format!("invalid {} value '{}'", column, value))
        };
        let start = cells[start_col].parse::<u64>().map_err(|_| bad(START, cells[start_col]))?;
        let end = cells[end_col].parse::<u64>().map_err(|_| bad(END, cells[end_col]))?;
        let score = cells[score_col]
            .parse::<f64>()
            .ok()
            .filter(|s| s.is_finite())
            .ok_or_else(|| bad(SCORE, cells[score_col]))?;
        let counts = gene_cols
            .iter()
            .map(|&i| parse_count(cells[i]).ok_or_else(|| bad(&columns[i], cells[i])))
            .collect::<Result<Vec<u32>>>()?;

        rows.push(BinaryRow {
            line_no,
            organism: cells[organism_col].to_string(),
            scaffold: cells[scaffold_col].to_string(),
            start,
            end,
            score,
            counts,
            raw: line.clone(),
        });
    }

    Ok(BinaryTable {
        header,
        columns,
        query_genes,
        rows,
    })
}

/// Read a binary table from disk
pub fn read_binary_table(path: &Path) -> Result<BinaryTable> {
    let reader = open_text(path)?;
    parse_binary_table(reader, &path.display().to_string())
}
