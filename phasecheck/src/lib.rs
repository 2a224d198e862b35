//! Phase completion hook for multi-phase agent build workflows.
//!
//! An executor agent ticks off steps in `status-update.md`; a checker agent
//! writes `verification-phase-<N>.md` with a PASS/FAIL verdict. This crate
//! reads both (never writes), finds the active phase, and tells the
//! orchestrator what to do next through an exit code and a short message.
//!
//! - **[`core`]**: Pure, deterministic parsing and classification. No I/O.
//! - **[`io`]**: Config loading and read-only access to feature directories.
//!
//! [`evaluate`] ties the two together for the CLI.

pub mod core;
pub mod error;
pub mod evaluate;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod message;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
