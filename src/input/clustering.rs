//! skDER clustering table reader
//!
//! skDER writes one tab-separated row per genome with a header line. The
//! columns used here are the genome path (0), its representative's path (1)
//! and the clustering label (4). Assembly accessions are pulled out of the
//! paths.

use regex::Regex;
use rustc_hash::FxHashSet;
use std::io::BufRead;
use std::path::Path;
use std::sync::OnceLock;

use crate::common::{AssemblyId, HitStatus};
use crate::error::{CleanerError, Result};

use super::open_text;

const ASSEMBLY_COL: usize = 0;
const REPRESENTATIVE_COL: usize = 1;
const LABEL_COL: usize = 4;

static ACCESSION_PATTERN: OnceLock<Regex> = OnceLock::new();

fn accession_pattern() -> &'static Regex {
    ACCESSION_PATTERN.get_or_init(|| Regex::new(r"GC[AF]_[0-9]{9}\.[0-9]+").expect("valid accession pattern"))
}

/// Extract the first GenBank/RefSeq assembly accession (`GCA_`/`GCF_` plus
/// nine digits and a version) from a path or file name.
pub fn extract_accession(text: &str) -> Result<AssemblyId> {
    accession_pattern()
        .find(text)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| CleanerError::AccessionParse(text.to_string()))
}

/// Like [`extract_accession`] but without failing
pub fn find_accession(text: &str) -> Option<AssemblyId> {
    accession_pattern().find(text).map(|m| m.as_str().to_string())
}

/// Clustering label as written by skDER
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawClusterLabel {
    /// The genome represents its own cluster
    RepresentativeToSelf,
    /// The genome is within the ANI/AF cutoffs of its representative
    WithinCutoffsRequested,
}

impl RawClusterLabel {
    /// Initial hit status for hits of a genome with this label
    pub fn status(&self) -> HitStatus {
        match self {
            RawClusterLabel::RepresentativeToSelf => HitStatus::Representative,
            RawClusterLabel::WithinCutoffsRequested => HitStatus::Redundant,
        }
    }
}

impl std::str::FromStr for RawClusterLabel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "representative_to_self" => Ok(RawClusterLabel::RepresentativeToSelf),
            "within_cutoffs_requested" => Ok(RawClusterLabel::WithinCutoffsRequested),
            other => Err(format!("Unknown clustering label: {}", other)),
        }
    }
}

/// One genome of the clustering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusteringRecord {
    pub assembly: AssemblyId,
    pub representative: AssemblyId,
    pub label: RawClusterLabel,
}

impl ClusteringRecord {
    pub fn new(assembly: impl Into<AssemblyId>, representative: impl Into<AssemblyId>, label: RawClusterLabel) -> Self {
        Self {
            assembly: assembly.into(),
            representative: representative.into(),
            label,
        }
    }
}

/// Parse a skDER clustering table. The first non-blank line is the header.
pub fn parse_clustering<R: BufRead>(reader: R, input: &str) -> Result<Vec<ClusteringRecord>> {
    let mut records = Vec::new();
    let mut seen: FxHashSet<AssemblyId> = FxHashSet::default();
    let mut header_seen = false;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| CleanerError::input_format(input, line_no, e.to_string()))?;
        if line.trim().is_empty() {
            continue;
        }
        if !header_seen {
            header_seen = true;
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() <= LABEL_COL {
            return Err(CleanerError::input_format(
                input,
                line_no,
                format!("expected at least {} tab-separated columns, found {}", LABEL_COL + 1, fields.len()),
            ));
        }

        let assembly = extract_accession(fields[ASSEMBLY_COL])?;
        let representative = extract_accession(fields[REPRESENTATIVE_COL])?;
        let label: RawClusterLabel = fields[LABEL_COL]
            .parse()
            .map_err(|e: String| CleanerError::input_format(input, line_no, e))?;

        if label == RawClusterLabel::RepresentativeToSelf && assembly != representative {
            return Err(CleanerError::input_format(
                input,
                line_no,
                format!("{} is labelled representative_to_self but points to {}", assembly, representative),
            ));
        }
        if !seen.insert(assembly.clone()) {
            return Err(CleanerError::input_format(
                input,
                line_no,
                format!("assembly {} is listed more than once", assembly),
            ));
        }

        records.push(ClusteringRecord {
            assembly,
            representative,
            label,
        });
    }

    Ok(records)
}

/// Read a skDER clustering table from disk
pub fn read_clustering(path: &Path) -> Result<Vec<ClusteringRecord>> {
    let reader = open_text(path)?;
    parse_clustering(reader, &path.display().to_string())
}
