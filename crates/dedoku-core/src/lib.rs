//! Core data model for the dedoku constraint-propagation solver.
//!
//! This crate provides the grid arena a solver operates on: 81 cells
//! cross-linked into 27 containers (9 rows, 9 columns, 9 blocks). Cells and
//! containers refer to each other through indices only; the [`Grid`] owns
//! everything, so there are no reference cycles and traversal is O(1) in
//! both directions.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of cell values 1-9
//! - [`digit_set`]: Nine-bit sets of digits, used for per-cell exclusions
//! - [`cell`]: Cell state ([`CellId`], [`Cell`]) and assignability
//! - [`container`]: Rows, columns and blocks as one [`Container`] type
//! - [`grid`]: The arena, construction from a seed, and rendering
//! - [`parse`]: Parsing puzzle text into a [`Grid`]
//!
//! # Examples
//!
//! ```
//! use dedoku_core::Grid;
//!
//! let grid: Grid = "
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
//! assert!(!grid.is_solved());
//! # Ok::<(), dedoku_core::ParseGridError>(())
//! ```

pub mod cell;
pub mod container;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod parse;

// Re-export commonly used types
pub use self::{
    cell::{Cell, CellId},
    container::{Container, ContainerKind},
    digit::Digit,
    digit_set::DigitSet,
    grid::Grid,
    parse::ParseGridError,
};
