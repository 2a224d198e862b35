//! Shared deterministic types for phase classification.
//!
//! These types are derived fresh from the status document on every run and
//! are never persisted.

use serde::Serialize;

use crate::exit_codes;

/// One phase section of the status document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    pub number: u32,
    /// Heading text after the colon, trimmed. May be empty.
    pub title: String,
    pub checked_steps: usize,
    pub unchecked_steps: usize,
}

impl Phase {
    /// True when no unchecked steps remain. A phase without any step lines
    /// counts as fully checked.
    pub fn is_fully_checked(&self) -> bool {
        self.unchecked_steps == 0
    }

    /// State derived from step counts alone, or `None` when the phase is
    /// fully checked and the verification report decides.
    pub fn progress_state(&self) -> Option<PhaseState> {
        if self.is_fully_checked() {
            None
        } else if self.checked_steps == 0 {
            Some(PhaseState::NotStarted)
        } else {
            Some(PhaseState::InProgress)
        }
    }

    /// `Phase 2` or `Phase 2 (Setup)` for messages.
    pub fn display_name(&self) -> String {
        phase_display_name(self.number, &self.title)
    }
}

pub(crate) fn phase_display_name(number: u32, title: &str) -> String {
    if title.is_empty() {
        format!("Phase {number}")
    } else {
        format!("Phase {number} ({title})")
    }
}

/// Checker verdict recorded in a verification report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportStatus {
    Pass,
    Fail,
}

/// Parsed verification report for one phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    pub status: ReportStatus,
    /// Free-text reason from the `**Reason**:` line, if any.
    pub reason: Option<String>,
}

/// Workflow state reported for a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhaseState {
    /// Only unchecked steps.
    NotStarted,
    /// Mix of checked and unchecked steps.
    InProgress,
    /// All steps checked, no verification report yet.
    AwaitingVerification,
    /// Report says FAIL.
    Failed,
    /// Report says PASS and later phases exist.
    PassedMoreRemain,
    /// Final phase passed verification.
    AllComplete,
}

impl PhaseState {
    /// Exit code the orchestrator branches on.
    pub fn exit_code(self) -> i32 {
        match self {
            PhaseState::NotStarted | PhaseState::PassedMoreRemain | PhaseState::AllComplete => {
                exit_codes::PROCEED
            }
            PhaseState::InProgress | PhaseState::AwaitingVerification | PhaseState::Failed => {
                exit_codes::HALT
            }
        }
    }

    /// Stable label matching the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            PhaseState::NotStarted => "NOT_STARTED",
            PhaseState::InProgress => "IN_PROGRESS",
            PhaseState::AwaitingVerification => "AWAITING_VERIFICATION",
            PhaseState::Failed => "FAILED",
            PhaseState::PassedMoreRemain => "PASSED_MORE_REMAIN",
            PhaseState::AllComplete => "ALL_COMPLETE",
        }
    }
}

/// Outcome of walking the phases of one document.
///
/// Always names exactly one phase and one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub phase: u32,
    pub title: String,
    pub state: PhaseState,
    /// The reported phase is the last heading in the document.
    pub final_phase: bool,
    /// FAIL reason from the report, when the state is `Failed`.
    pub reason: Option<String>,
    /// Phases resolved as PASS during the walk, in document order.
    pub verified_phases: Vec<u32>,
}

impl Classification {
    pub fn display_name(&self) -> String {
        phase_display_name(self.phase, &self.title)
    }
}
