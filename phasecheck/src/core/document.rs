//! Status document parsing.
//!
//! A phase section runs from a `### Phase N: Title` heading to the next phase
//! heading or end of document. Step lines inside a section are tallied as
//! checked (`- [x]`, `- [X]`) or unchecked (`- [ ]`). Only the checked token
//! is case-folded. Text before the first phase heading is ignored.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::core::types::Phase;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*#{1,6}\s+Phase\s+(\d+)\s*:(.*)$").expect("valid phase heading regex")
});
static CHECKED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+\[[xX]\]").expect("valid checked step regex"));
static UNCHECKED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+\[ \]").expect("valid unchecked step regex"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("no phase headings found (expected lines like '### Phase 1: Setup')")]
    NoPhases,
    #[error("phase {0} appears more than once")]
    DuplicatePhase(u32),
    #[error("invalid phase number '{0}' (expected a positive integer)")]
    InvalidNumber(String),
}

/// Phases of one status document, in document order.
///
/// Never empty and phase numbers are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhasePlan {
    phases: Vec<Phase>,
}

impl PhasePlan {
    pub fn new(phases: Vec<Phase>) -> Result<Self, DocumentError> {
        if phases.is_empty() {
            return Err(DocumentError::NoPhases);
        }
        let mut seen = HashSet::new();
        for phase in &phases {
            if !seen.insert(phase.number) {
                return Err(DocumentError::DuplicatePhase(phase.number));
            }
        }
        Ok(Self { phases })
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Last phase in document order and everything before it.
    pub fn split_last(&self) -> (&Phase, &[Phase]) {
        match self.phases.split_last() {
            Some(split) => split,
            None => unreachable!("PhasePlan is never empty"),
        }
    }
}

/// Parse a status document into its phase plan.
pub fn parse_phases(content: &str) -> Result<PhasePlan, DocumentError> {
    let mut phases: Vec<Phase> = Vec::new();

    for line in content.lines() {
        if let Some(caps) = HEADING_RE.captures(line) {
            let raw = &caps[1];
            let number = raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| DocumentError::InvalidNumber(raw.to_string()))?;
            phases.push(Phase {
                number,
                title: caps[2].trim().to_string(),
                checked_steps: 0,
                unchecked_steps: 0,
            });
            continue;
        }

        let Some(current) = phases.last_mut() else {
            continue;
        };
        if CHECKED_RE.is_match(line) {
            current.checked_steps += 1;
        } else if UNCHECKED_RE.is_match(line) {
            current.unchecked_steps += 1;
        }
    }

    PhasePlan::new(phases)
}
