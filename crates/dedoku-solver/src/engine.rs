//! The two-phase solve loop.

use dedoku_core::{CellId, ContainerKind, Grid};

use crate::{outcome::SolveOutcome, rule};

/// Default pass budget: the loop gives up after this many passes.
pub const DEFAULT_PASS_LIMIT: u32 = 1000;

/// Drives deduction passes over a grid until it is solved or the pass
/// budget is exhausted.
///
/// Each pass has two phases. The unsolved-cell phase refines exclusions
/// and resolves singles, cell by cell in index order; the solved-cell
/// phase, run only if the grid is still incomplete, propagates placed
/// values into band siblings. Scans are strictly sequential, so a
/// deduction made early in a phase is visible to every later cell of the
/// same phase. The whole process is deterministic: the same input always
/// yields the same final state and pass count.
///
/// # Examples
///
/// ```
/// use dedoku_core::Grid;
/// use dedoku_solver::Solver;
///
/// let mut grid: Grid = ".".repeat(81).parse()?;
///
/// // An all-blank grid offers no deductions; the budget runs out
/// let outcome = Solver::new().with_pass_limit(10).solve(&mut grid);
/// assert!(!outcome.is_solved());
/// assert_eq!(outcome.passes(), 10);
/// # Ok::<(), dedoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Solver {
    pass_limit: u32,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Creates a solver with the default pass budget of 1000.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pass_limit: DEFAULT_PASS_LIMIT,
        }
    }

    /// Returns a solver with the given pass budget.
    #[must_use]
    pub const fn with_pass_limit(self, pass_limit: u32) -> Self {
        Self { pass_limit }
    }

    /// Returns the configured pass budget.
    #[must_use]
    pub const fn pass_limit(&self) -> u32 {
        self.pass_limit
    }

    /// Runs the unsolved-cell phase: every cell unsolved when visited gets
    /// its exclusions refined and a resolution attempt, in index order.
    ///
    /// Cells solved earlier in the same phase are skipped when reached.
    pub fn unsolved_pass(&self, grid: &mut Grid) {
        for id in CellId::ALL {
            if grid.cell(id).is_solved() {
                continue;
            }
            rule::refine_exclusions(grid, id);
            rule::attempt_resolve(grid, id);
        }
    }

    /// Runs the solved-cell phase: every cell solved at phase start
    /// propagates its value along each axis in row, column, block order.
    ///
    /// Cells solved during the phase wait until the next pass to
    /// propagate.
    pub fn solved_pass(&self, grid: &mut Grid) {
        let solved: Vec<CellId> = CellId::ALL
            .into_iter()
            .filter(|&id| grid.cell(id).is_solved())
            .collect();
        for id in solved {
            for axis in ContainerKind::ALL {
                rule::forced_placement(grid, id, axis);
            }
        }
    }

    /// Alternates the two phases until the grid is solved or the pass
    /// budget runs out.
    ///
    /// A grid that is already complete runs zero passes. Running out of
    /// budget is a reported outcome, not an error; the grid keeps
    /// whatever progress was made.
    pub fn solve(&self, grid: &mut Grid) -> SolveOutcome {
        let mut passes = 0;
        while !grid.is_solved() && passes < self.pass_limit {
            self.unsolved_pass(grid);
            if !grid.is_solved() {
                self.solved_pass(grid);
            }
            passes += 1;
        }
        SolveOutcome::new(grid.is_solved(), passes)
    }
}
