use std::fmt;
use std::path::{Path, PathBuf};

use crate::input::binary::{split_columns, REQUIRED_COLUMNS};
use crate::input::SummaryIndex;

/// The five fixed columns plus at least one query gene.
///
/// These are the documented minimums (at least 6 columns, at least 2 hits),
/// not the stricter "more than 6 columns, more than 3 hits" comparison.
pub const MIN_COLUMNS: usize = REQUIRED_COLUMNS.len() + 1;
pub const MIN_HITS: usize = 2;

/// One failed validation rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    MissingFile { path: PathBuf },
    Unreadable { path: PathBuf, message: String },
    TooFewColumns { found: usize, required: usize },
    MissingColumns { missing: Vec<String> },
    TooFewHits { found: usize, required: usize },
    /// The summary must list one cluster per binary table row
    ClusterCountMismatch { hits: usize, clusters: usize },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::MissingFile { path } => write!(f, "'{}' does not exist", path.display()),
            ValidationIssue::Unreadable { path, message } => {
                write!(f, "'{}' could not be read: {}", path.display(), message)
            }
            ValidationIssue::TooFewColumns { found, required } => write!(
                f,
                "binary table has {} columns; at least {} are expected",
                found, required
            ),
            ValidationIssue::MissingColumns { missing } => {
                write!(f, "binary table lacks the column(s) {}", missing.join(", "))
            }
            ValidationIssue::TooFewHits { found, required } => write!(
                f,
                "binary table has {} hits; at least {} are expected",
                found, required
            ),
            ValidationIssue::ClusterCountMismatch { hits, clusters } => write!(
                f,
                "binary table has {} hits but the summary mentions {} clusters",
                hits, clusters
            ),
        }
    }
}

/// All failed rules of one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {}", issue)?;
        }
        Ok(())
    }
}

/// Check a cblaster binary table and summary file against every rule
pub fn validate_inputs(binary: &Path, summary: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();
    let hits = validate_binary(binary, &mut report);
    validate_summary(summary, hits, &mut report);
    report
}

/// Returns the number of hit rows if the file could be read
fn validate_binary(path: &Path, report: &mut ValidationReport) -> Option<usize> {
    if !path.is_file() {
        report.push(ValidationIssue::MissingFile { path: path.to_path_buf() });
        return None;
    }
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            report.push(ValidationIssue::Unreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
            return None;
        }
    };

    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let columns = lines.next().map(split_columns).unwrap_or_default();
    if columns.len() < MIN_COLUMNS {
        report.push(ValidationIssue::TooFewColumns {
            found: columns.len(),
            required: MIN_COLUMNS,
        });
    }
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !columns.contains(*c))
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        report.push(ValidationIssue::MissingColumns { missing });
    }

    let hits = lines.count();
    if hits < MIN_HITS {
        report.push(ValidationIssue::TooFewHits {
            found: hits,
            required: MIN_HITS,
        });
    }
    Some(hits)
}

fn validate_summary(path: &Path, hits: Option<usize>, report: &mut ValidationReport) {
    if !path.is_file() {
        report.push(ValidationIssue::MissingFile { path: path.to_path_buf() });
        return;
    }
    match SummaryIndex::read(path) {
        Ok(index) => {
            if let Some(hits) = hits {
                if index.cluster_mentions() != hits {
                    report.push(ValidationIssue::ClusterCountMismatch {
                        hits,
                        clusters: index.cluster_mentions(),
                    });
                }
            }
        }
        Err(e) => report.push(ValidationIssue::Unreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
    }
}
