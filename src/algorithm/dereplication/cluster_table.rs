//! Expansion of the assembly-level clustering into a per-hit status table

use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

use crate::common::{HitStatus, StatusTable};
use crate::error::{CleanerError, Result};
use crate::input::{ClusteringRecord, ScaffoldMap};

/// Build the base status table.
///
/// Every clustering record is replicated onto each hit scaffold of its
/// assembly. Assemblies without hits are dropped with a warning. Afterwards
/// every cluster must contain at least one representative hit.
pub fn build_status_table(records: &[ClusteringRecord], scaffolds: &ScaffoldMap) -> Result<StatusTable> {
    let hits_by_assembly = scaffolds.hits_by_assembly();
    let mut table = StatusTable::new();
    let mut clustered: FxHashSet<&str> = FxHashSet::default();
    let mut dropped = 0usize;

    for record in records {
        clustered.insert(record.assembly.as_str());
        let Some(hits) = hits_by_assembly.get(record.assembly.as_str()) else {
            warn!(
                "No hit scaffolds linked to assembly {} (cluster {}); dropping it",
                record.assembly, record.representative
            );
            dropped += 1;
            continue;
        };
        for hit in hits {
            table.insert(hit.to_string(), record.representative.clone(), record.label.status())?;
        }
    }

    let unclustered: Vec<&str> = hits_by_assembly
        .keys()
        .copied()
        .filter(|a| !clustered.contains(a))
        .collect();
    if !unclustered.is_empty() {
        warn!(
            "{} assemblies with hits are absent from the clustering; their hits are not reported",
            unclustered.len()
        );
        debug!("Unclustered assemblies: {:?}", unclustered);
    }

    check_representatives(&table)?;

    info!(
        "Status table: {} hits in {} genome clusters ({} assemblies without hits dropped)",
        table.len(),
        table.clusters().len(),
        dropped
    );
    Ok(table)
}

/// Every genome cluster must contain at least one representative hit
pub(crate) fn check_representatives(table: &StatusTable) -> Result<()> {
    for (representative, members) in table.clusters() {
        let represented = members
            .iter()
            .any(|hit| table.status(hit) == Some(HitStatus::Representative));
        if !represented {
            return Err(CleanerError::InvariantViolation(format!(
                "genome cluster {} has no hit from its representative assembly",
                representative
            )));
        }
    }
    Ok(())
}
