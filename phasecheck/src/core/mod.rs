//! Deterministic, pure logic for phase classification.
//!
//! Core modules must be free of I/O side effects. Verification reports are
//! reached through the [`classifier::ReportSource`] seam so the state machine
//! can be exercised against in-memory reports.

pub mod classifier;
pub mod document;
pub mod report;
pub mod types;
