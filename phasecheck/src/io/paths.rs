//! Canonical paths for one feature directory.

use std::path::PathBuf;

use crate::error::{EvaluateError, EvaluateResult};
use crate::io::config::PhasecheckConfig;

/// All paths the hook reads for a feature id.
#[derive(Debug, Clone)]
pub struct FeaturePaths {
    pub feature_id: String,
    pub feature_dir: PathBuf,
    pub status_path: PathBuf,
    report_file_prefix: String,
    report_file_suffix: String,
}

impl FeaturePaths {
    pub fn new(config: &PhasecheckConfig, feature_id: &str) -> Self {
        let feature_dir = config.features_root.join(feature_id);
        Self {
            feature_id: feature_id.to_string(),
            status_path: feature_dir.join(&config.status_file),
            feature_dir,
            report_file_prefix: config.report_file_prefix.clone(),
            report_file_suffix: config.report_file_suffix.clone(),
        }
    }

    /// Verification report path for a phase number.
    pub fn report_path(&self, phase: u32) -> PathBuf {
        self.feature_dir.join(format!(
            "{}{}{}",
            self.report_file_prefix, phase, self.report_file_suffix
        ))
    }
}

/// Validate that a feature id names a single directory under the features root.
pub fn validate_feature_id(id: &str) -> EvaluateResult<()> {
    if id.is_empty() {
        return Err(EvaluateError::usage("feature id must not be empty"));
    }
    if id == "." || id == ".." {
        return Err(EvaluateError::usage(format!(
            "feature id must name a directory (got '{id}')"
        )));
    }
    if id
        .chars()
        .any(|c| !(c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-'))
    {
        return Err(EvaluateError::usage(format!(
            "feature id must be [A-Za-z0-9._-] only (got '{id}')"
        )));
    }
    Ok(())
}
