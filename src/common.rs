use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{CleanerError, Result};

/// Scaffold identifier of a cblaster hit (e.g. `NZ_CP012345.1`)
pub type HitId = String;
/// Genome assembly accession (e.g. `GCF_000123456.1`)
pub type AssemblyId = String;

/// Dereplication status of a single hit.
///
/// Variant order is the report order: representatives first, redundant last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HitStatus {
    /// Hit of the assembly that stands in for its redundancy cluster
    Representative,
    /// Kept because its gene cluster content differs from the representative's
    ReaddedByContent,
    /// Kept because its score is an outlier within its content group
    ReaddedByScore,
    Redundant,
}

impl HitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HitStatus::Representative => "representative",
            HitStatus::ReaddedByContent => "readded_by_content",
            HitStatus::ReaddedByScore => "readded_by_score",
            HitStatus::Redundant => "redundant",
        }
    }

    /// Whether a hit with this status ends up in the cleaned output
    pub fn is_retained(&self) -> bool {
        !matches!(self, HitStatus::Redundant)
    }

    /// Whether this status can only be reached through recovery
    pub fn is_readded(&self) -> bool {
        matches!(self, HitStatus::ReaddedByContent | HitStatus::ReaddedByScore)
    }
}

impl fmt::Display for HitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HitStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "representative" | "dereplication_representative" => Ok(HitStatus::Representative),
            "readded_by_content" | "readded_by_cluster_content" => Ok(HitStatus::ReaddedByContent),
            "readded_by_score" | "readded_by_outlier_score" => Ok(HitStatus::ReaddedByScore),
            "redundant" => Ok(HitStatus::Redundant),
            other => Err(format!("Unknown dereplication status: {}", other)),
        }
    }
}

/// Homolog counts per query gene, in the column order of the hit table.
///
/// Two hits belong to the same content group iff their vectors are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeatureVector(pub Vec<u32>);

impl FeatureVector {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u32>> for FeatureVector {
    fn from(counts: Vec<u32>) -> Self {
        FeatureVector(counts)
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        write!(f, "[{}]", parts.join(","))
    }
}

/// Attributes of one hit used by the recovery engine
#[derive(Debug, Clone, PartialEq)]
pub struct HitAttributes {
    pub scaffold: HitId,
    pub features: FeatureVector,
    pub score: f64,
}

impl HitAttributes {
    pub fn new(scaffold: impl Into<HitId>, features: impl Into<FeatureVector>, score: f64) -> Self {
        Self {
            scaffold: scaffold.into(),
            features: features.into(),
            score,
        }
    }
}

/// Per-hit feature vectors and scores, keyed by scaffold.
#[derive(Debug, Clone, Default)]
pub struct HitAttributeTable {
    query_genes: Vec<String>,
    hits: FxHashMap<HitId, HitAttributes>,
}

impl HitAttributeTable {
    /// Create an empty table over the given query gene columns.
    ///
    /// A table without query gene columns cannot be grouped by content.
    pub fn new(query_genes: Vec<String>) -> Result<Self> {
        if query_genes.is_empty() {
            return Err(CleanerError::missing_column(
                "hit attribute table",
                "<query gene count columns>",
            ));
        }
        Ok(Self {
            query_genes,
            hits: FxHashMap::default(),
        })
    }

    /// Insert a hit. Returns `false` if the scaffold was already present;
    /// the first row for a scaffold wins.
    pub fn insert(&mut self, hit: HitAttributes) -> Result<bool> {
        if hit.features.len() != self.query_genes.len() {
            return Err(CleanerError::InvariantViolation(format!(
                "hit {} has {} homolog counts but the table has {} query genes",
                hit.scaffold,
                hit.features.len(),
                self.query_genes.len()
            )));
        }
        if !hit.score.is_finite() {
            return Err(CleanerError::InvariantViolation(format!(
                "hit {} has a non-finite score",
                hit.scaffold
            )));
        }
        if self.hits.contains_key(&hit.scaffold) {
            return Ok(false);
        }
        self.hits.insert(hit.scaffold.clone(), hit);
        Ok(true)
    }

    pub fn get(&self, scaffold: &str) -> Option<&HitAttributes> {
        self.hits.get(scaffold)
    }

    pub fn query_genes(&self) -> &[String] {
        &self.query_genes
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Cluster membership and status of one hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub representative: AssemblyId,
    pub status: HitStatus,
}

/// Per-hit dereplication status table.
///
/// Rows are only ever added by the cluster table builder; afterwards the sole
/// mutation is [`StatusTable::upgrade`], which moves `redundant` rows to a
/// readded status and leaves everything else untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTable {
    entries: FxHashMap<HitId, StatusEntry>,
}

impl StatusTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row. Fails if the hit already has one.
    pub fn insert(&mut self, hit: HitId, representative: AssemblyId, status: HitStatus) -> Result<()> {
        if let Some(existing) = self.entries.get(&hit) {
            return Err(CleanerError::InvariantViolation(format!(
                "hit {} is assigned to clusters {} and {}",
                hit, existing.representative, representative
            )));
        }
        self.entries.insert(hit, StatusEntry { representative, status });
        Ok(())
    }

    /// Upgrade a `redundant` hit to a readded status.
    ///
    /// Returns `true` if the status changed. Hits that are already
    /// representative or readded keep their status.
    pub fn upgrade(&mut self, hit: &str, status: HitStatus) -> Result<bool> {
        if !status.is_readded() {
            return Err(CleanerError::InvariantViolation(format!(
                "'{}' is not a recovery status (hit {})",
                status, hit
            )));
        }
        let entry = self.entries.get_mut(hit).ok_or_else(|| {
            CleanerError::InvariantViolation(format!("hit {} is not in the status table", hit))
        })?;
        if entry.status != HitStatus::Redundant {
            return Ok(false);
        }
        entry.status = status;
        Ok(true)
    }

    pub fn get(&self, hit: &str) -> Option<&StatusEntry> {
        self.entries.get(hit)
    }

    pub fn status(&self, hit: &str) -> Option<HitStatus> {
        self.entries.get(hit).map(|e| e.status)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HitId, &StatusEntry)> {
        self.entries.iter()
    }

    /// Hits grouped by representative assembly; clusters and members sorted.
    pub fn clusters(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut clusters: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (hit, entry) in &self.entries {
            clusters
                .entry(entry.representative.as_str())
                .or_default()
                .push(hit.as_str());
        }
        for members in clusters.values_mut() {
            members.sort_unstable();
        }
        clusters
    }

    /// Number of member hits per representative assembly
    pub fn cluster_sizes(&self) -> BTreeMap<AssemblyId, usize> {
        let mut sizes = BTreeMap::new();
        for entry in self.entries.values() {
            *sizes.entry(entry.representative.clone()).or_insert(0) += 1;
        }
        sizes
    }

    /// Rows ordered by (representative, status, hit)
    pub fn sorted_rows(&self) -> Vec<(&HitId, &StatusEntry)> {
        let mut rows: Vec<_> = self.entries.iter().collect();
        rows.sort_by(|(ha, a), (hb, b)| {
            a.representative
                .cmp(&b.representative)
                .then(a.status.cmp(&b.status))
                .then(ha.cmp(hb))
        });
        rows
    }

    /// Count of hits per status
    pub fn status_counts(&self) -> BTreeMap<HitStatus, usize> {
        let mut counts = BTreeMap::new();
        for entry in self.entries.values() {
            *counts.entry(entry.status).or_insert(0) += 1;
        }
        counts
    }
}
