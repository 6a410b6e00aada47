//! Session kind and the stage selection policy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the three reflection stages a session represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    Initial,
    Intermediate,
    Final,
}

impl SessionKind {
    /// Selects the kind of the session at `index` in a plan of `stage_count`
    /// stages.
    ///
    /// The first stage is `Initial`, the last is `Final`, everything between
    /// is `Intermediate`. With a single stage, index 0 is both first and last
    /// and resolves to `Initial`: the first-stage check runs before the
    /// last-stage check.
    ///
    /// Callers are expected to have checked `index < stage_count`.
    pub fn select(index: usize, stage_count: usize) -> Self {
        if index == 0 {
            Self::Initial
        } else if index + 1 == stage_count {
            Self::Final
        } else {
            Self::Intermediate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Intermediate => "Intermediate",
            Self::Final => "Final",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
