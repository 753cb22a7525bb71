//! Main dereplication run function
//!
//! Reads the input tables, builds the base status table, recovers hits and
//! writes the reports. The in-memory part is exposed separately as
//! [`dereplicate`] and [`recover_from_status`].

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use tracing::info;

use crate::algorithm::validation::validate_inputs;
use crate::common::{AssemblyId, HitAttributeTable, HitId, StatusTable};
use crate::config::{OutputPaths, RecoveryPolicy};
use crate::error::CleanerError;
use crate::input::{read_binary_table, read_clustering, BinaryTable, ClusteringRecord, ScaffoldMap, SummaryIndex};
use crate::report::{self, cleaned_lines, cluster_labels, write_lines};

use super::args::RecoverArgs;
use super::cluster_table::{build_status_table, check_representatives};
use super::recovery::recover_hits;
use super::retained::retained_hits;

/// Everything a dereplication run decides
#[derive(Debug, Clone)]
pub struct DereplicationOutcome {
    /// Status table before recovery
    pub base: StatusTable,
    /// Status table after recovery
    pub updated: StatusTable,
    /// Member hits per representative assembly
    pub cluster_sizes: BTreeMap<AssemblyId, usize>,
    /// Kept scaffolds, ordered by (representative, status, scaffold)
    pub retained: Vec<HitId>,
}

/// Build the status table from a clustering and recover hits
pub fn dereplicate(
    records: &[ClusteringRecord],
    scaffolds: &ScaffoldMap,
    attributes: &HitAttributeTable,
    policy: &RecoveryPolicy,
) -> crate::error::Result<DereplicationOutcome> {
    let base = build_status_table(records, scaffolds)?;
    finish(base, attributes, policy)
}

/// Recover hits starting from an existing status table, e.g. one read back
/// from a previous run. Fails if a genome cluster has no representative hit.
pub fn recover_from_status(
    base: StatusTable,
    attributes: &HitAttributeTable,
    policy: &RecoveryPolicy,
) -> crate::error::Result<DereplicationOutcome> {
    check_representatives(&base)?;
    finish(base, attributes, policy)
}

fn finish(
    base: StatusTable,
    attributes: &HitAttributeTable,
    policy: &RecoveryPolicy,
) -> crate::error::Result<DereplicationOutcome> {
    let cluster_sizes = base.cluster_sizes();
    let updated = recover_hits(&base, attributes, policy)?;
    let retained = retained_hits(&updated);
    info!("Got {} retained scaffold IDs out of {}", retained.len(), updated.len());
    Ok(DereplicationOutcome {
        base,
        updated,
        cluster_sizes,
        retained,
    })
}

/// Write the status table, cluster sizes, cleaned binary table and, given a
/// summary, the cluster labels of the retained hits
pub fn write_reports(
    outcome: &DereplicationOutcome,
    binary: &BinaryTable,
    summary: Option<&SummaryIndex>,
    paths: &OutputPaths,
) -> crate::error::Result<()> {
    report::write_to_path(&paths.cluster_sizes, |w| {
        report::write_cluster_sizes(w, &outcome.cluster_sizes)
    })?;
    info!("Genome cluster sizes written to {}", paths.cluster_sizes.display());

    report::write_to_path(&paths.status_table, |w| report::write_status_table(w, &outcome.updated))?;
    info!("Dereplication statuses written to {}", paths.status_table.display());

    let lines = cleaned_lines(binary, &outcome.retained)?;
    report::write_to_path(&paths.cleaned_binary, |w| write_lines(w, Some(binary.header.as_str()), &lines))?;
    info!("Cleaned binary table written to {}", paths.cleaned_binary.display());

    if let Some(summary) = summary {
        let labels = cluster_labels(summary, &outcome.retained)?;
        report::write_to_path(&paths.cluster_labels, |w| write_lines(w, None, &labels))?;
        info!("Cluster labels written to {}", paths.cluster_labels.display());
    }
    Ok(())
}

pub fn run(args: RecoverArgs) -> Result<()> {
    let num_threads = if args.num_threads == 0 {
        num_cpus::get()
    } else {
        args.num_threads
    };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .context("Failed to build thread pool")?;

    let policy = args.policy();
    policy.validate()?;
    let paths = args.output_paths();
    paths.create_dir()?;

    if args.validate_inputs {
        let summary = args
            .summary
            .as_ref()
            .context("--validate-inputs needs the summary file (--summary)")?;
        let report = validate_inputs(&args.binary, summary);
        if !report.is_ok() {
            return Err(CleanerError::Validation(report).into());
        }
        info!("Input files passed validation");
    }

    let binary = read_binary_table(&args.binary)
        .with_context(|| format!("Failed to read binary table {}", args.binary.display()))?;
    info!("Extracted {} hits from {}", binary.rows.len(), args.binary.display());
    let attributes = binary.attribute_table()?;

    let base = match &args.base_status {
        Some(path) => report::read_status_file(path)
            .with_context(|| format!("Failed to read status table {}", path.display()))?,
        None => {
            let clustering_path = args.clustering.as_ref().context("--clustering is required")?;
            let map_path = args.scaffold_map.as_ref().context("--scaffold-map is required")?;
            let clustering = read_clustering(clustering_path)
                .with_context(|| format!("Failed to parse clustering {}", clustering_path.display()))?;
            let scaffolds = ScaffoldMap::read_tsv(map_path)
                .with_context(|| format!("Failed to read scaffold map {}", map_path.display()))?;
            info!(
                "Parsed {} clustered assemblies and {} scaffold links",
                clustering.len(),
                scaffolds.len()
            );
            build_status_table(&clustering, &scaffolds)?
        }
    };

    let outcome = pool.install(|| recover_from_status(base, &attributes, &policy))?;

    let summary = match &args.summary {
        Some(path) => Some(
            SummaryIndex::read(path).with_context(|| format!("Failed to read summary {}", path.display()))?,
        ),
        None => None,
    };
    write_reports(&outcome, &binary, summary.as_ref(), &paths)?;

    for (status, count) in outcome.updated.status_counts() {
        info!("  {:<20} {}", status.as_str(), count);
    }
    info!("All done! Results are written to {}", paths.dir.display());
    Ok(())
}
