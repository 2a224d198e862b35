//! Phase-walk state machine.
//!
//! Phases are visited in document order. The first phase that is not started,
//! in progress, awaiting verification, or failed is reported and the walk
//! stops there; later phases and their reports are never touched. A PASS on a
//! non-final phase moves the walk on. A PASS on the final phase completes the
//! workflow.

use std::collections::HashMap;
use std::convert::Infallible;

use tracing::debug;

use crate::core::document::PhasePlan;
use crate::core::types::{Classification, Phase, PhaseState, ReportStatus, VerificationReport};

/// Lookup of verification reports by phase number.
///
/// `Ok(None)` means the checker has not written a report for that phase yet.
pub trait ReportSource {
    type Error;

    fn load_report(&self, phase: u32) -> Result<Option<VerificationReport>, Self::Error>;
}

impl ReportSource for HashMap<u32, VerificationReport> {
    type Error = Infallible;

    fn load_report(&self, phase: u32) -> Result<Option<VerificationReport>, Infallible> {
        Ok(self.get(&phase).cloned())
    }
}

/// Classify the workflow by walking the plan in document order.
pub fn classify<S>(plan: &PhasePlan, reports: &S) -> Result<Classification, S::Error>
where
    S: ReportSource + ?Sized,
{
    let (last, rest) = plan.split_last();
    let mut verified_phases = Vec::new();

    for phase in rest {
        let (state, reason) = phase_verdict(phase, false, reports)?;
        if state == PhaseState::PassedMoreRemain {
            verified_phases.push(phase.number);
            continue;
        }
        return Ok(classification(phase, state, false, reason, verified_phases));
    }

    let (state, reason) = phase_verdict(last, true, reports)?;
    if state == PhaseState::AllComplete {
        verified_phases.push(last.number);
    }
    Ok(classification(last, state, true, reason, verified_phases))
}

fn phase_verdict<S>(
    phase: &Phase,
    final_phase: bool,
    reports: &S,
) -> Result<(PhaseState, Option<String>), S::Error>
where
    S: ReportSource + ?Sized,
{
    if let Some(state) = phase.progress_state() {
        debug!(
            phase = phase.number,
            checked = phase.checked_steps,
            unchecked = phase.unchecked_steps,
            state = state.label(),
            "phase has unchecked steps"
        );
        return Ok((state, None));
    }

    let verdict = match reports.load_report(phase.number)? {
        None => (PhaseState::AwaitingVerification, None),
        Some(report) => match report.status {
            ReportStatus::Fail => (PhaseState::Failed, report.reason),
            ReportStatus::Pass if final_phase => (PhaseState::AllComplete, None),
            ReportStatus::Pass => (PhaseState::PassedMoreRemain, None),
        },
    };
    debug!(
        phase = phase.number,
        final_phase,
        state = verdict.0.label(),
        "phase steps complete"
    );
    Ok(verdict)
}

fn classification(
    phase: &Phase,
    state: PhaseState,
    final_phase: bool,
    reason: Option<String>,
    verified_phases: Vec<u32>,
) -> Classification {
    Classification {
        phase: phase.number,
        title: phase.title.clone(),
        state,
        final_phase,
        reason,
        verified_phases,
    }
}
