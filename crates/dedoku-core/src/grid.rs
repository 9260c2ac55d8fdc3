//! The grid arena: 81 cells cross-linked into 27 containers.

use std::fmt::{self, Display};

use crate::{
    cell::{Cell, CellId},
    container::{Container, ContainerKind},
    digit::Digit,
    digit_set::DigitSet,
};

/// A 9×9 grid: the owner of all cell and container state.
///
/// The grid is built once from an 81-value seed and is structurally
/// immutable afterwards; only cell values and exclusion sets change during
/// solving, through [`Grid::assign`] and [`Grid::exclude`]. Containers link
/// to cells (and cells back to containers) by index, so both directions of
/// the cell/container relationship are owned in one place.
///
/// # Examples
///
/// ```
/// use dedoku_core::{CellId, ContainerKind, Digit, Grid};
///
/// let mut seed = [0; 81];
/// seed[0] = 5;
/// let grid = Grid::from_seed(seed);
///
/// assert_eq!(grid.cell(CellId::new(0)).value(), Some(Digit::D5));
/// assert!(
///     grid.container(ContainerKind::Row, 0)
///         .contains_value(grid.cells(), Digit::D5)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: [Container; 9],
    columns: [Container; 9],
    blocks: [Container; 9],
}

impl Grid {
    /// Builds a grid from 81 seed values in row-major order, 0 meaning
    /// blank.
    ///
    /// Nonzero values mark their cells solved from the start. Seed legality
    /// (no duplicate digit within a container) is not checked; an illegal
    /// seed produces a grid the solver will simply fail to complete.
    ///
    /// # Panics
    ///
    /// Panics if any seed value is greater than 9.
    #[must_use]
    pub fn from_seed(seed: [u8; 81]) -> Self {
        #[expect(clippy::cast_possible_truncation)]
        let container_array =
            |kind| std::array::from_fn(|index| Container::new(kind, index as u8));

        let mut rows: [Container; 9] = container_array(ContainerKind::Row);
        let mut columns: [Container; 9] = container_array(ContainerKind::Column);
        let mut blocks: [Container; 9] = container_array(ContainerKind::Block);

        let mut cells = Vec::with_capacity(81);
        for (id, value) in CellId::ALL.into_iter().zip(seed) {
            assert!(value <= 9, "Invalid seed value: {value}");
            #[expect(clippy::cast_possible_truncation)]
            let row = (id.index() / 9) as u8;
            #[expect(clippy::cast_possible_truncation)]
            let column = (id.index() % 9) as u8;
            let block = column / 3 + 3 * (row / 3);

            rows[usize::from(row)].push_member(id);
            columns[usize::from(column)].push_member(id);
            blocks[usize::from(block)].push_member(id);
            cells.push(Cell::new(id, Digit::try_from_value(value), row, column, block));
        }

        Self {
            cells,
            rows,
            columns,
            blocks,
        }
    }

    /// Returns the cell with the given id.
    #[must_use]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.index()]
    }

    /// Returns all 81 cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the 9 containers of one axis, index-ordered.
    #[must_use]
    pub const fn containers(&self, kind: ContainerKind) -> &[Container; 9] {
        match kind {
            ContainerKind::Row => &self.rows,
            ContainerKind::Column => &self.columns,
            ContainerKind::Block => &self.blocks,
        }
    }

    /// Returns one container by axis and index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub fn container(&self, kind: ContainerKind, index: u8) -> &Container {
        &self.containers(kind)[usize::from(index)]
    }

    /// Returns the container holding `id` on `kind`'s axis.
    #[must_use]
    pub fn container_of(&self, id: CellId, kind: ContainerKind) -> &Container {
        self.container(kind, self.cell(id).container_index(kind))
    }

    /// Returns the other two containers in the band of three containing
    /// `index`.
    ///
    /// Bands are fixed index triples on every axis: 0-2, 3-5, 6-8. For
    /// blocks this means block-index bands, not geometric adjacency of
    /// blocks to rows or columns; the solved-cell pass relies on exactly
    /// this grouping.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub fn band_siblings(&self, kind: ContainerKind, index: u8) -> [&Container; 2] {
        assert!(index < 9, "Invalid container index: {index}");
        let start = index / 3 * 3;
        let band = &self.containers(kind)[usize::from(start)..usize::from(start) + 3];
        let mut siblings = band.iter().filter(|container| container.index() != index);
        // A band of three minus one member is always exactly two
        match (siblings.next(), siblings.next()) {
            (Some(a), Some(b)) => [a, b],
            _ => unreachable!(),
        }
    }

    /// Assigns `digit` to the cell, returning `true` if it was newly
    /// placed.
    ///
    /// No-op (returning `false`) on an already-solved cell: a placed value
    /// is never overwritten.
    pub fn assign(&mut self, id: CellId, digit: Digit) -> bool {
        self.cells[id.index()].assign(digit)
    }

    /// Unions `digits` into the cell's exclusion set.
    pub fn exclude(&mut self, id: CellId, digits: DigitSet) {
        self.cells[id.index()].exclude(digits);
    }

    /// Returns `true` if every cell has a value.
    ///
    /// Solvedness only; whether the values actually satisfy the row,
    /// column and block constraints is not checked.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Cell::is_solved)
    }

    /// Returns the grid as an 81-character line, `.` for blanks.
    ///
    /// The result parses back into an equal grid via [`FromStr`].
    ///
    /// [`FromStr`]: std::str::FromStr
    #[must_use]
    pub fn to_line_string(&self) -> String {
        let mut line = String::with_capacity(81);
        for cell in &self.cells {
            match cell.value() {
                Some(digit) => line.push(char::from(b'0' + digit.value())),
                None => line.push('.'),
            }
        }
        line
    }
}

impl Display for Grid {
    /// Renders the grid as a framed block, a space for each blank cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-------------------")?;
        for row in &self.rows {
            for value in row.values(&self.cells) {
                match value {
                    Some(digit) => write!(f, "|{digit}")?,
                    None => write!(f, "| ")?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "-------------------")
    }
}
