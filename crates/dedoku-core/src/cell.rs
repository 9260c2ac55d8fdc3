//! Cell state and identity.

use std::fmt::{self, Display};

use crate::{container::ContainerKind, digit::Digit, digit_set::DigitSet};

/// Identifier of a cell in the grid arena: 0-80, row-major.
///
/// Ids are the only way cells and containers refer to each other; the
/// [`Grid`](crate::Grid) owns both arenas and resolves ids to state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(u8);

impl CellId {
    /// Array containing all 81 cell ids in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self(0); 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Creates a cell id from a row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub fn new(index: u8) -> Self {
        assert!(index < 81, "Invalid cell index: {index}");
        Self(index)
    }

    /// Returns the row-major index of this cell (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// One grid position: its value, exclusion set and container links.
///
/// A cell is solved exactly when it holds a value; there is no separate
/// solved flag beyond the `Some`/`None` state of [`Cell::value`]. The
/// `excluded` set records values the cell is known not to take. It only
/// grows while the cell is unsolved and stops being maintained afterwards.
///
/// Cells are created by [`Grid`](crate::Grid) construction and mutated only
/// through the grid's `assign`/`exclude` operations.
#[derive(Debug, Clone)]
pub struct Cell {
    id: CellId,
    value: Option<Digit>,
    excluded: DigitSet,
    row: u8,
    column: u8,
    block: u8,
}

impl Cell {
    pub(crate) fn new(id: CellId, value: Option<Digit>, row: u8, column: u8, block: u8) -> Self {
        Self {
            id,
            value,
            excluded: DigitSet::EMPTY,
            row,
            column,
            block,
        }
    }

    /// Returns this cell's id.
    #[must_use]
    pub const fn id(&self) -> CellId {
        self.id
    }

    /// Returns the cell's value, or `None` if unassigned.
    #[must_use]
    pub const fn value(&self) -> Option<Digit> {
        self.value
    }

    /// Returns `true` if the cell has been assigned a value.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the set of values this cell is known not to take.
    ///
    /// Meaningful only while the cell is unsolved; the set is no longer
    /// updated after the cell is assigned.
    #[must_use]
    pub const fn excluded(&self) -> DigitSet {
        self.excluded
    }

    /// Returns the index (0-8) of the cell's container on `kind`'s axis.
    #[must_use]
    pub const fn container_index(&self, kind: ContainerKind) -> u8 {
        match kind {
            ContainerKind::Row => self.row,
            ContainerKind::Column => self.column,
            ContainerKind::Block => self.block,
        }
    }

    /// Returns `true` if `digit` could be assigned to this cell: the cell
    /// is unsolved and `digit` is not excluded.
    ///
    /// Solved cells always return `false`, whatever the digit.
    #[must_use]
    pub fn can_be_assigned(&self, digit: Digit) -> bool {
        !self.is_solved() && !self.excluded.contains(digit)
    }

    /// Assigns `digit`, returning `true` if the cell was newly solved.
    ///
    /// No-op on an already-solved cell; a value is never overwritten.
    pub(crate) fn assign(&mut self, digit: Digit) -> bool {
        if self.is_solved() {
            return false;
        }
        self.value = Some(digit);
        true
    }

    /// Unions `digits` into the exclusion set. No-op on solved cells.
    pub(crate) fn exclude(&mut self, digits: DigitSet) {
        if self.is_solved() {
            return;
        }
        self.excluded |= digits;
    }
}
