//! Partition of a genome cluster's hits into content groups

use std::collections::BTreeMap;

use crate::common::{FeatureVector, HitAttributes};

/// Hits of one genome cluster sharing the same homolog-count vector
#[derive(Debug, Clone)]
pub struct ContentGroup<'a> {
    pub features: &'a FeatureVector,
    /// Sorted by scaffold ID
    pub members: Vec<&'a HitAttributes>,
}

impl<'a> ContentGroup<'a> {
    pub fn scores(&self) -> Vec<f64> {
        self.members.iter().map(|m| m.score).collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Group hits by exact feature vector equality.
///
/// Groups come out ordered by feature vector and members by scaffold ID, so
/// the enumeration is the same whatever order the hits were given in.
pub fn group_by_content<'a>(hits: &[&'a HitAttributes]) -> Vec<ContentGroup<'a>> {
    let mut groups: BTreeMap<&'a FeatureVector, Vec<&'a HitAttributes>> = BTreeMap::new();
    for hit in hits {
        groups.entry(&hit.features).or_default().push(*hit);
    }
    groups
        .into_iter()
        .map(|(features, mut members)| {
            members.sort_by(|a, b| a.scaffold.cmp(&b.scaffold));
            ContentGroup { features, members }
        })
        .collect()
}
