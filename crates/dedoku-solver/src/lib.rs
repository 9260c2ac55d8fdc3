//! Pass-based constraint-propagation solving for dedoku grids.
//!
//! The solver applies three deduction rules over a [`Grid`]: direct
//! elimination and hidden singles during an unsolved-cell pass, and
//! band-forced placement during a solved-cell pass. Passes alternate until
//! the grid is solved or a pass budget runs out. There is no backtracking:
//! a puzzle that needs guessing is reported unsolved, which is an outcome,
//! not an error.
//!
//! # Examples
//!
//! ```
//! use dedoku_core::Grid;
//! use dedoku_solver::Solver;
//!
//! let mut grid: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let outcome = Solver::new().solve(&mut grid);
//! assert!(outcome.is_solved());
//! println!("{outcome}");
//! # Ok::<(), dedoku_core::ParseGridError>(())
//! ```
//!
//! [`Grid`]: dedoku_core::Grid

pub mod engine;
pub mod outcome;
pub mod rule;

pub use self::{
    engine::{DEFAULT_PASS_LIMIT, Solver},
    outcome::SolveOutcome,
};
