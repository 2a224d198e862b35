//! Human-readable status lines for the orchestrator.
//!
//! The first line states what was found; indented lines say what the
//! orchestrator should do next. Exit codes alone do not distinguish "not ready
//! yet" from "failed", so these lines are part of the contract.

use std::path::Path;

use crate::core::types::{Classification, PhaseState};

const MISSING_REASON: &str = "See verification report for details";

/// Render the status lines for a classification.
///
/// `report_path` is the verification report consulted for the reported phase.
pub fn status_lines(classification: &Classification, report_path: Option<&Path>) -> Vec<String> {
    let mut name = classification.display_name();
    if classification.final_phase {
        name.push_str(" (final phase)");
    }

    match classification.state {
        PhaseState::NotStarted => vec![
            format!("{name} not started"),
            "   Delegate this phase to the build executor".to_string(),
        ],
        PhaseState::InProgress => vec![
            format!("{name} still in progress (has unchecked steps)"),
            "   Executor should continue working on this phase".to_string(),
        ],
        PhaseState::AwaitingVerification => vec![
            format!("{name} implementation complete, waiting for checker verification"),
            "   Delegate this phase to the build checker".to_string(),
        ],
        PhaseState::Failed => {
            let reason = classification.reason.as_deref().unwrap_or(MISSING_REASON);
            let mut lines = vec![
                format!("{name} verification failed"),
                format!("   Reason: {reason}"),
            ];
            if let Some(path) = report_path {
                lines.push(format!("   Read: {}", path.display()));
            }
            lines.push("   Return this phase to the build executor with the reason above".to_string());
            lines
        }
        PhaseState::PassedMoreRemain => vec![
            format!("{name} verification passed, more phases remain"),
            "   Continue to the next phase".to_string(),
        ],
        PhaseState::AllComplete => vec![
            "All phases complete and verified".to_string(),
            format!("   Final phase: {} passed verification", classification.display_name()),
            format!(
                "   Verified phases: {}",
                join_numbers(&classification.verified_phases)
            ),
            "   Workflow complete".to_string(),
        ],
    }
}

fn join_numbers(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
