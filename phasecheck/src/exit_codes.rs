//! Stable exit codes for the phase completion hook.
//!
//! The orchestrator only branches on these two values and reads the printed
//! message to tell "not ready yet" apart from a genuine failure.

/// Orchestrator may proceed (start a phase, move on, or finish).
pub const PROCEED: i32 = 0;
/// Orchestrator must not proceed past this point (waiting, failed, or error).
pub const HALT: i32 = 1;
