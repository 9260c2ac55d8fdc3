//! Exclusion refinement: learning what a cell cannot be.

use dedoku_core::{CellId, ContainerKind, DigitSet, Grid};

/// Unions the values present in the cell's row, column and block into its
/// exclusion set.
///
/// Unassigned members contribute nothing. The exclusion set only grows;
/// running the rule twice with no intervening grid change leaves it
/// unchanged. No-op on solved cells.
///
/// # Examples
///
/// ```
/// use dedoku_core::{CellId, Digit, Grid};
/// use dedoku_solver::rule::refine_exclusions;
///
/// let mut seed = [0; 81];
/// seed[1] = 4; // same row as cell 0
/// seed[9] = 7; // same column as cell 0
/// let mut grid = Grid::from_seed(seed);
///
/// refine_exclusions(&mut grid, CellId::new(0));
/// let excluded = grid.cell(CellId::new(0)).excluded();
/// assert!(excluded.contains(Digit::D4));
/// assert!(excluded.contains(Digit::D7));
/// assert_eq!(excluded.len(), 2);
/// ```
pub fn refine_exclusions(grid: &mut Grid, id: CellId) {
    if grid.cell(id).is_solved() {
        return;
    }

    let mut seen = DigitSet::EMPTY;
    for kind in ContainerKind::ALL {
        let container = grid.container_of(id, kind);
        seen.extend(container.values(grid.cells()).flatten());
    }
    grid.exclude(id, seen);
}
