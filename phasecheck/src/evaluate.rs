//! Evaluation of one feature directory.
//!
//! Reads the status document, walks its phases, and packages the verdict with
//! the message and exit code the CLI reports.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::core::classifier::classify;
use crate::core::document::parse_phases;
use crate::core::types::PhaseState;
use crate::error::{EvaluateError, EvaluateResult};
use crate::io::feature_store::{FeatureStore, read_status_document};
use crate::io::paths::FeaturePaths;
use crate::message::status_lines;

/// Outcome of one run: exactly one phase and one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub feature_id: String,
    pub phase: u32,
    pub title: String,
    pub state: PhaseState,
    pub final_phase: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub verified_phases: Vec<u32>,
    /// Verification report read for the reported phase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_path: Option<PathBuf>,
    pub message: String,
    pub exit_code: i32,
}

/// Evaluate a feature directory. Never writes to it.
pub fn evaluate_feature(paths: &FeaturePaths) -> EvaluateResult<EvaluationResult> {
    let content = read_status_document(paths)?;
    let plan = parse_phases(&content)
        .map_err(|err| EvaluateError::malformed_document(&paths.status_path, err.to_string()))?;
    info!(
        feature = %paths.feature_id,
        phases = plan.phases().len(),
        "parsed status document"
    );

    let classification = classify(&plan, &FeatureStore::new(paths))?;
    let report_path = match classification.state {
        PhaseState::Failed | PhaseState::PassedMoreRemain | PhaseState::AllComplete => {
            Some(paths.report_path(classification.phase))
        }
        PhaseState::NotStarted | PhaseState::InProgress | PhaseState::AwaitingVerification => {
            None
        }
    };
    let message = status_lines(&classification, report_path.as_deref()).join("\n");
    let exit_code = classification.state.exit_code();
    info!(
        feature = %paths.feature_id,
        phase = classification.phase,
        state = classification.state.label(),
        exit_code,
        "evaluated feature"
    );

    Ok(EvaluationResult {
        feature_id: paths.feature_id.clone(),
        phase: classification.phase,
        title: classification.title,
        state: classification.state,
        final_phase: classification.final_phase,
        reason: classification.reason,
        verified_phases: classification.verified_phases,
        report_path,
        message,
        exit_code,
    })
}
