//! Rows, columns and blocks as one container type.

use tinyvec::ArrayVec;

use crate::{
    cell::{Cell, CellId},
    digit::Digit,
};

/// The constraint axis a container belongs to.
///
/// The distinction only matters when mapping a flat cell position to its
/// container indices during grid construction; afterwards all three kinds
/// behave identically, so there is a single [`Container`] type rather than
/// one per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ContainerKind {
    /// A row of the grid.
    #[display("row")]
    Row,
    /// A column of the grid.
    #[display("column")]
    Column,
    /// A 3×3 block of the grid.
    #[display("block")]
    Block,
}

impl ContainerKind {
    /// All kinds in the axis order used by solving passes: row, column,
    /// block.
    pub const ALL: [Self; 3] = [Self::Row, Self::Column, Self::Block];
}

/// A named group of exactly 9 cells sharing one constraint axis.
///
/// A container is a view: it holds [`CellId`]s, not cells, and never owns
/// state. Members are appended during grid construction and fixed
/// afterwards, in position order along the axis. Queries that need cell
/// state take the grid's cell arena as a slice.
#[derive(Debug, Clone)]
pub struct Container {
    kind: ContainerKind,
    index: u8,
    members: ArrayVec<[CellId; 9]>,
}

impl Container {
    pub(crate) fn new(kind: ContainerKind, index: u8) -> Self {
        debug_assert!(index < 9);
        Self {
            kind,
            index,
            members: ArrayVec::new(),
        }
    }

    pub(crate) fn push_member(&mut self, id: CellId) {
        self.members.push(id);
    }

    /// Returns the container's axis.
    #[must_use]
    pub const fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Returns the container's index on its axis (0-8).
    #[must_use]
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Returns the member cell ids in position order.
    #[must_use]
    pub fn members(&self) -> &[CellId] {
        &self.members
    }

    /// Returns each member's current value in member order, `None` for
    /// unassigned cells.
    pub fn values<'a>(&'a self, cells: &'a [Cell]) -> impl Iterator<Item = Option<Digit>> + 'a {
        self.members.iter().map(|id| cells[id.index()].value())
    }

    /// Returns `true` if some member is solved with `digit`.
    #[must_use]
    pub fn contains_value(&self, cells: &[Cell], digit: Digit) -> bool {
        self.values(cells).any(|value| value == Some(digit))
    }

    /// Returns the members to which `digit` could currently be assigned.
    pub fn assignable_members<'a>(
        &'a self,
        cells: &'a [Cell],
        digit: Digit,
    ) -> impl Iterator<Item = CellId> + 'a {
        self.members
            .iter()
            .copied()
            .filter(move |id| cells[id.index()].can_be_assigned(digit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn test_kind_display() {
        assert_eq!(ContainerKind::Row.to_string(), "row");
        assert_eq!(ContainerKind::Column.to_string(), "column");
        assert_eq!(ContainerKind::Block.to_string(), "block");
    }

    #[test]
    fn test_values_in_member_order() {
        let mut seed = [0; 81];
        seed[0] = 4;
        seed[8] = 9;
        let grid = Grid::from_seed(seed);

        let row = grid.container(ContainerKind::Row, 0);
        let values: Vec<_> = row.values(grid.cells()).collect();
        assert_eq!(values.len(), 9);
        assert_eq!(values[0], Some(Digit::D4));
        assert_eq!(values[8], Some(Digit::D9));
        assert!(values[1..8].iter().all(Option::is_none));
    }

    #[test]
    fn test_contains_value() {
        let mut seed = [0; 81];
        seed[40] = 5; // centre of the grid
        let grid = Grid::from_seed(seed);

        let row = grid.container(ContainerKind::Row, 4);
        assert!(row.contains_value(grid.cells(), Digit::D5));
        assert!(!row.contains_value(grid.cells(), Digit::D6));

        let other_row = grid.container(ContainerKind::Row, 0);
        assert!(!other_row.contains_value(grid.cells(), Digit::D5));
    }

    #[test]
    fn test_assignable_members_skips_solved() {
        let mut seed = [0; 81];
        seed[0] = 1;
        seed[1] = 2;
        let grid = Grid::from_seed(seed);

        let row = grid.container(ContainerKind::Row, 0);
        let assignable: Vec<_> = row.assignable_members(grid.cells(), Digit::D3).collect();
        // The two seeded cells are solved and therefore not assignable
        assert_eq!(assignable.len(), 7);
        assert!(!assignable.contains(&CellId::new(0)));
        assert!(!assignable.contains(&CellId::new(1)));
    }
}
