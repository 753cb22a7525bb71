//! cblaster summary file index
//!
//! In the summary every scaffold section starts with the scaffold ID, a
//! dashed underline, and then one `Cluster N, ...` block per gene cluster.
//! Only the first cluster label of each scaffold is indexed.

use regex::Regex;
use rustc_hash::FxHashMap;
use std::io::BufRead;
use std::path::Path;
use std::sync::OnceLock;

use crate::common::HitId;
use crate::error::{CleanerError, Result};

use super::open_text;

static CLUSTER_LABEL: OnceLock<Regex> = OnceLock::new();

fn cluster_label_pattern() -> &'static Regex {
    CLUSTER_LABEL.get_or_init(|| Regex::new(r"^Cluster \d+").expect("valid cluster label pattern"))
}

fn is_underline(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && line.chars().all(|c| c == '-')
}

/// Cluster label of each scaffold in a cblaster summary
#[derive(Debug, Clone, Default)]
pub struct SummaryIndex {
    labels: FxHashMap<HitId, String>,
    cluster_mentions: usize,
}

impl SummaryIndex {
    pub fn parse<R: BufRead>(reader: R, input: &str) -> Result<Self> {
        let mut lines = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            lines.push(line.map_err(|e| CleanerError::input_format(input, idx + 1, e.to_string()))?);
        }

        let mut index = SummaryIndex {
            cluster_mentions: lines.iter().map(|l| l.matches("Cluster").count()).sum(),
            ..Default::default()
        };
        for window in lines.windows(3) {
            if !is_underline(&window[1]) {
                continue;
            }
            let Some(label) = cluster_label_pattern().find(window[2].trim()) else {
                continue;
            };
            let Some(scaffold) = window[0].split_whitespace().next() else {
                continue;
            };
            index
                .labels
                .entry(scaffold.to_string())
                .or_insert_with(|| label.as_str().to_string());
        }
        Ok(index)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let reader = open_text(path)?;
        Self::parse(reader, &path.display().to_string())
    }

    /// First cluster label (e.g. `Cluster 12`) listed under a scaffold
    pub fn label(&self, scaffold: &str) -> Option<&str> {
        self.labels.get(scaffold).map(String::as_str)
    }

    /// Number of times the word `Cluster` occurs in the file
    pub fn cluster_mentions(&self) -> usize {
        self.cluster_mentions
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
