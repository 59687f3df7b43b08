use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;

/// Result of checking one file or one part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    Failed,
    /// No checks exist for this input; treated as a failure.
    NotImplemented,
}

impl Outcome {
    pub fn from_passed(passed: bool) -> Self {
        if passed { Self::Passed } else { Self::Failed }
    }

    /// Logical AND. `NotImplemented` dominates `Failed` so that a stub
    /// result is never reported as an ordinary check failure.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::NotImplemented, _) | (_, Self::NotImplemented) => Self::NotImplemented,
            (Self::Failed, _) | (_, Self::Failed) => Self::Failed,
            (Self::Passed, Self::Passed) => Self::Passed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::NotImplemented => "not implemented",
        }
    }
}

/// Pass/fail outcome plus every diagnostic collected on the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub outcome: Outcome,
    pub diagnostics: Vec<Diagnostic>,
}

impl Verdict {
    pub fn new(outcome: Outcome, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            outcome,
            diagnostics,
        }
    }

    pub fn pass() -> Self {
        Self::new(Outcome::Passed, Vec::new())
    }

    pub fn fail(diagnostics: Vec<Diagnostic>) -> Self {
        Self::new(Outcome::Failed, diagnostics)
    }

    pub fn not_implemented() -> Self {
        Self::new(Outcome::NotImplemented, Vec::new())
    }

    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Passed
    }

    /// Combine two verdicts without dropping either side's diagnostics.
    #[must_use]
    pub fn and(mut self, other: Verdict) -> Self {
        self.merge(other);
        self
    }

    pub fn merge(&mut self, other: Verdict) {
        self.outcome = self.outcome.and(other.outcome);
        self.diagnostics.extend(other.diagnostics);
    }
}

impl Default for Verdict {
    fn default() -> Self {
        Self::pass()
    }
}
