use crate::common::{HitId, StatusTable};

/// Scaffolds kept after dereplication and recovery, ordered by
/// (representative, status, scaffold)
pub fn retained_hits(table: &StatusTable) -> Vec<HitId> {
    table
        .sorted_rows()
        .into_iter()
        .filter(|(_, entry)| entry.status.is_retained())
        .map(|(hit, _)| hit.clone())
        .collect()
}
