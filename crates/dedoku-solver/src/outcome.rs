//! The result of a solve run.

use std::fmt::{self, Display};

/// Outcome of [`Solver::solve`](crate::Solver::solve).
///
/// Failing to solve is a reported outcome, not an error: callers must
/// check [`SolveOutcome::is_solved`] rather than assume success. The pass
/// count says how many full passes ran before the loop stopped, whether by
/// solving the grid or by exhausting the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOutcome {
    solved: bool,
    passes: u32,
}

impl SolveOutcome {
    pub(crate) fn new(solved: bool, passes: u32) -> Self {
        Self { solved, passes }
    }

    /// Returns `true` if the grid was completely solved.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Returns the number of passes the loop ran.
    #[must_use]
    pub const fn passes(&self) -> u32 {
        self.passes
    }
}

impl Display for SolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.solved {
            write!(f, "solved in {} passes", self.passes)
        } else {
            write!(f, "not solved after {} passes", self.passes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(SolveOutcome::new(true, 3).to_string(), "solved in 3 passes");
        assert_eq!(
            SolveOutcome::new(false, 1000).to_string(),
            "not solved after 1000 passes"
        );
    }
}
