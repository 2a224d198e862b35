//! Read-only access to a feature directory.
//!
//! Read failures are converted into [`EvaluateError`] at the read site so the
//! message always names the path involved.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::core::classifier::ReportSource;
use crate::core::report::parse_report;
use crate::core::types::VerificationReport;
use crate::error::{EvaluateError, EvaluateResult};
use crate::io::paths::FeaturePaths;

/// Read the status document, checking the feature directory first.
pub fn read_status_document(paths: &FeaturePaths) -> EvaluateResult<String> {
    match fs::metadata(&paths.feature_dir) {
        Ok(meta) if meta.is_dir() => {}
        Err(err) if err.kind() != ErrorKind::NotFound => {
            return Err(EvaluateError::unreadable(&paths.feature_dir, err));
        }
        _ => {
            return Err(EvaluateError::not_found(
                "feature directory",
                &paths.feature_dir,
            ));
        }
    }
    let content = read_optional(&paths.status_path)?
        .ok_or_else(|| EvaluateError::not_found("status document", &paths.status_path))?;
    debug!(path = %paths.status_path.display(), bytes = content.len(), "read status document");
    Ok(content)
}

/// Verification reports stored next to the status document.
pub struct FeatureStore<'a> {
    paths: &'a FeaturePaths,
}

impl<'a> FeatureStore<'a> {
    pub fn new(paths: &'a FeaturePaths) -> Self {
        Self { paths }
    }
}

impl ReportSource for FeatureStore<'_> {
    type Error = EvaluateError;

    fn load_report(&self, phase: u32) -> EvaluateResult<Option<VerificationReport>> {
        let path = self.paths.report_path(phase);
        let Some(content) = read_optional(&path)? else {
            debug!(phase, path = %path.display(), "no verification report");
            return Ok(None);
        };
        let report = parse_report(&content)
            .map_err(|err| EvaluateError::malformed_report(&path, err.to_string()))?;
        debug!(phase, path = %path.display(), status = ?report.status, "read verification report");
        Ok(Some(report))
    }
}

/// Read a file, mapping "does not exist" to `None`.
fn read_optional(path: &Path) -> EvaluateResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(EvaluateError::unreadable(path, err)),
    }
}
