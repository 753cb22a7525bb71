use crate::error::{CleanerError, Result};
use crate::stats::Deviation;

/// Controls which hits the recovery engine may restore
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecoveryPolicy {
    /// Restore one hit per content group that lacks the representative.
    /// Disabling this also disables score recovery.
    pub by_content: bool,
    /// Restore hits with an outlier score within their content group
    pub by_score: bool,
    /// Minimum |z| for a score to count as an outlier
    pub outlier_z: f64,
    /// Minimum |score - modal score| for a score to count as an outlier
    pub min_score_diff: f64,
    pub deviation: Deviation,
}

impl Default for RecoveryPolicy {
    fn default() -> Self {
        Self {
            by_content: true,
            by_score: true,
            outlier_z: 2.0,
            min_score_diff: 0.1,
            deviation: Deviation::Sample,
        }
    }
}

impl RecoveryPolicy {
    /// Policy that leaves the base status table untouched
    pub fn disabled() -> Self {
        Self {
            by_content: false,
            by_score: false,
            ..Default::default()
        }
    }

    /// Content recovery without score outliers
    pub fn content_only() -> Self {
        Self {
            by_score: false,
            ..Default::default()
        }
    }

    /// Whether score outliers are considered at all
    pub fn scores_enabled(&self) -> bool {
        self.by_content && self.by_score
    }

    pub fn validate(&self) -> Result<()> {
        if !self.outlier_z.is_finite() || self.outlier_z < 0.0 {
            return Err(CleanerError::Config(format!(
                "outlier z-score threshold must be a non-negative number, got {}",
                self.outlier_z
            )));
        }
        if !self.min_score_diff.is_finite() || self.min_score_diff < 0.0 {
            return Err(CleanerError::Config(format!(
                "minimum score difference must be a non-negative number, got {}",
                self.min_score_diff
            )));
        }
        Ok(())
    }
}
