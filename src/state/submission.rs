//! In-flight state for the registration submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! One machine per form instance. A submit while an attempt is pending is
//! ignored, so a double click or a doubly-bound handler can never put two
//! requests in flight for one user submission.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

/// Where the current submission attempt stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No attempt pending; the form is interactive.
    #[default]
    Idle,
    /// A request is in flight; further submits are ignored.
    Submitting,
}

/// Submission state machine: `Idle` -> `Submitting` -> settle -> `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmissionState {
    phase: Phase,
}

impl SubmissionState {
    /// Start an attempt. Returns `false` when one is already in flight,
    /// in which case the caller must drop the submit event.
    pub fn try_begin(&mut self) -> bool {
        if self.phase == Phase::Submitting {
            return false;
        }
        self.phase = Phase::Submitting;
        true
    }

    /// Settle the pending attempt and return to `Idle`. The form stays
    /// interactive afterwards; a resubmit starts an independent attempt.
    pub fn finish(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Whether an attempt is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }
}
