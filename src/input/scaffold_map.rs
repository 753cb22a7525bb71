//! Scaffold to assembly accession map
//!
//! Stored on disk as a two-column TSV (`scaffold<TAB>assembly`) with an
//! optional header line and `#` comments.

use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use crate::common::{AssemblyId, HitId};
use crate::error::{CleanerError, Result};

use super::open_text;

const HEADER: [&str; 2] = ["scaffold", "assembly"];

/// Which assembly each hit scaffold belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldMap {
    assemblies: FxHashMap<HitId, AssemblyId>,
}

impl ScaffoldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link a scaffold to its assembly. A scaffold can belong to one
    /// assembly only; re-inserting the same link is a no-op.
    pub fn insert(&mut self, hit: impl Into<HitId>, assembly: impl Into<AssemblyId>) -> Result<()> {
        let hit = hit.into();
        let assembly = assembly.into();
        match self.assemblies.get(&hit) {
            Some(existing) if *existing == assembly => Ok(()),
            Some(existing) => Err(CleanerError::InvariantViolation(format!(
                "scaffold {} is linked to both {} and {}",
                hit, existing, assembly
            ))),
            None => {
                self.assemblies.insert(hit, assembly);
                Ok(())
            }
        }
    }

    pub fn assembly_of(&self, hit: &str) -> Option<&str> {
        self.assemblies.get(hit).map(String::as_str)
    }

    /// Scaffolds per assembly, members sorted
    pub fn hits_by_assembly(&self) -> FxHashMap<&str, Vec<&str>> {
        let mut by_assembly: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
        for (hit, assembly) in &self.assemblies {
            by_assembly.entry(assembly.as_str()).or_default().push(hit.as_str());
        }
        for hits in by_assembly.values_mut() {
            hits.sort_unstable();
        }
        by_assembly
    }

    /// (scaffold, assembly) pairs sorted by assembly then scaffold
    pub fn sorted_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .assemblies
            .iter()
            .map(|(h, a)| (h.as_str(), a.as_str()))
            .collect();
        pairs.sort_by(|x, y| x.1.cmp(y.1).then(x.0.cmp(y.0)));
        pairs
    }

    pub fn len(&self) -> usize {
        self.assemblies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assemblies.is_empty()
    }

    pub fn parse_tsv<R: BufRead>(reader: R, input: &str) -> Result<Self> {
        let mut map = ScaffoldMap::new();
        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|e| CleanerError::input_format(input, line_no, e.to_string()))?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = trimmed.split('\t').map(str::trim).collect();
            if fields.len() != 2 || fields.iter().any(|f| f.is_empty()) {
                return Err(CleanerError::input_format(
                    input,
                    line_no,
                    "expected 'scaffold<TAB>assembly'",
                ));
            }
            if fields[0] == HEADER[0] && fields[1] == HEADER[1] {
                continue;
            }
            map.insert(fields[0], fields[1]).map_err(|e| match e {
                CleanerError::InvariantViolation(msg) => CleanerError::input_format(input, line_no, msg),
                other => other,
            })?;
        }
        Ok(map)
    }

    pub fn read_tsv(path: &Path) -> Result<Self> {
        let reader = open_text(path)?;
        Self::parse_tsv(reader, &path.display().to_string())
    }

    pub fn write_tsv<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "{}\t{}", HEADER[0], HEADER[1])?;
        for (hit, assembly) in self.sorted_pairs() {
            writeln!(writer, "{}\t{}", hit, assembly)?;
        }
        writer.flush()
    }

    pub fn write_tsv_file(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| CleanerError::io(path, e))?;
        self.write_tsv(BufWriter::new(file))
            .map_err(|e| CleanerError::io(path, e))
    }
}
