//! Recovery of gene cluster diversity lost by genome dereplication
//!
//! Within a genome cluster, hits are split into content groups (identical
//! homolog counts per query gene). Each content group that does not contain
//! a representative hit gets one hit back, and hits whose score is an
//! outlier within their content group are restored as well.
//!
//! Decisions for a content group depend only on its own members and the base
//! status table, so clusters are processed in parallel and the resulting
//! upgrades applied afterwards.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::common::{HitAttributeTable, HitAttributes, HitId, HitStatus, StatusTable};
use crate::config::RecoveryPolicy;
use crate::error::{CleanerError, Result};
use crate::stats::{modal_value, zscores};

use super::content::{group_by_content, ContentGroup};

/// A status change decided by the recovery engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upgrade {
    pub hit: HitId,
    pub status: HitStatus,
}

impl Upgrade {
    fn new(hit: &str, status: HitStatus) -> Self {
        Self {
            hit: hit.to_string(),
            status,
        }
    }
}

/// Apply content and score recovery to a base status table.
///
/// Returns a new table; `base` is left as it is. With content recovery
/// disabled the result equals `base`.
pub fn recover_hits(
    base: &StatusTable,
    attributes: &HitAttributeTable,
    policy: &RecoveryPolicy,
) -> Result<StatusTable> {
    policy.validate()?;
    let mut updated = base.clone();

    if !policy.by_content {
        info!("All recovery options disabled; keeping the dereplication statuses as they are");
        return Ok(updated);
    }

    let clusters: Vec<(&str, Vec<&str>)> = base.clusters().into_iter().collect();
    let upgrades = clusters
        .par_iter()
        .map(|(representative, hits)| recover_cluster(base, attributes, policy, representative, hits))
        .collect::<Result<Vec<Vec<Upgrade>>>>()?;

    let mut by_content = 0usize;
    let mut by_score = 0usize;
    for upgrade in upgrades.into_iter().flatten() {
        if updated.upgrade(&upgrade.hit, upgrade.status)? {
            match upgrade.status {
                HitStatus::ReaddedByContent => by_content += 1,
                HitStatus::ReaddedByScore => by_score += 1,
                _ => {}
            }
        }
    }

    info!(
        "Recovered {} hits by gene cluster content and {} by outlier score",
        by_content, by_score
    );
    Ok(updated)
}

/// Decide the upgrades for one genome cluster
pub fn recover_cluster(
    base: &StatusTable,
    attributes: &HitAttributeTable,
    policy: &RecoveryPolicy,
    representative: &str,
    hits: &[&str],
) -> Result<Vec<Upgrade>> {
    let members = hits
        .iter()
        .map(|hit| {
            attributes.get(hit).ok_or_else(|| {
                CleanerError::InvariantViolation(format!(
                    "hit {} in genome cluster {} has no row in the hit table",
                    hit, representative
                ))
            })
        })
        .collect::<Result<Vec<&HitAttributes>>>()?;

    let groups = group_by_content(&members);
    debug!(
        "Genome cluster {}: {} hits in {} content groups",
        representative,
        members.len(),
        groups.len()
    );

    let mut upgrades = Vec::new();
    for group in &groups {
        upgrades.extend(recover_group(base, policy, group)?);
    }
    Ok(upgrades)
}

/// Decide the upgrades for one content group
pub fn recover_group(base: &StatusTable, policy: &RecoveryPolicy, group: &ContentGroup) -> Result<Vec<Upgrade>> {
    if group.is_empty() {
        return Err(CleanerError::InvariantViolation(format!(
            "content group {} has no members",
            group.features
        )));
    }

    let scores = group.scores();
    // undefined for singletons and groups with identical scores
    let z = if policy.scores_enabled() && scores.iter().any(|s| *s != scores[0]) {
        zscores(&scores, policy.deviation)
    } else {
        None
    };
    let Some(z) = z else {
        return Ok(content_representative(base, &group.members).into_iter().collect());
    };

    let mode = modal_value(&scores).ok_or_else(|| {
        CleanerError::InvariantViolation(format!("content group {} has no modal score", group.features))
    })?;

    let mut upgrades = Vec::new();
    let mut non_outliers = Vec::with_capacity(group.len());
    for (member, zscore) in group.members.iter().zip(&z) {
        if is_outlier(member.score, *zscore, mode, policy) {
            if base.status(&member.scaffold) != Some(HitStatus::Representative) {
                debug!(
                    "Outlier score {} (z = {:.3}, mode = {}) for {}",
                    member.score, zscore, mode, member.scaffold
                );
                upgrades.push(Upgrade::new(&member.scaffold, HitStatus::ReaddedByScore));
            }
        } else {
            non_outliers.push(*member);
        }
    }
    upgrades.extend(content_representative(base, &non_outliers));
    Ok(upgrades)
}

/// Outlier test: far from the mean in z units and not just marginally away
/// from the modal score
pub fn is_outlier(score: f64, zscore: f64, mode: f64, policy: &RecoveryPolicy) -> bool {
    zscore.abs() >= policy.outlier_z && (score - mode).abs() >= policy.min_score_diff
}

/// Pick the hit that stands in for a content group lacking a representative:
/// the member with the smallest scaffold ID.
fn content_representative(base: &StatusTable, members: &[&HitAttributes]) -> Option<Upgrade> {
    let represented = members
        .iter()
        .any(|m| base.status(&m.scaffold) == Some(HitStatus::Representative));
    if represented {
        return None;
    }
    members
        .iter()
        .min_by(|a, b| a.scaffold.cmp(&b.scaffold))
        .map(|m| Upgrade::new(&m.scaffold, HitStatus::ReaddedByContent))
}
