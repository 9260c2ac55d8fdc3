//! Single-candidate resolution: direct elimination and hidden singles.

use dedoku_core::{CellId, ContainerKind, Grid};

/// Tries to resolve an unsolved cell, returning `true` if it was solved.
///
/// Two rules are tried, the second only when the first does not apply:
///
/// 1. **Direct elimination** (naked single): fires if and only if exactly
///    one digit remains outside the cell's exclusion set, and assigns it.
///    With all nine digits excluded (a contradictory grid) the rule stays
///    inert and the cell remains unsolved; that is not an error.
/// 2. **Hidden single**: for each remaining candidate in ascending order
///    and each of the cell's containers in row, column, block order, the
///    candidate is placed here if this cell is the container's only member
///    that could take it.
///
/// # Examples
///
/// ```
/// use dedoku_core::{CellId, Digit, DigitSet, Grid};
/// use dedoku_solver::rule::attempt_resolve;
///
/// let mut grid = Grid::from_seed([0; 81]);
/// let id = CellId::new(0);
///
/// // Exclude everything but 4
/// let mut excluded = DigitSet::FULL;
/// excluded.remove(Digit::D4);
/// grid.exclude(id, excluded);
///
/// assert!(attempt_resolve(&mut grid, id));
/// assert_eq!(grid.cell(id).value(), Some(Digit::D4));
/// ```
pub fn attempt_resolve(grid: &mut Grid, id: CellId) -> bool {
    if grid.cell(id).is_solved() {
        return false;
    }

    let candidates = !grid.cell(id).excluded();
    if let Some(digit) = candidates.as_single() {
        return grid.assign(id, digit);
    }

    for digit in candidates {
        for kind in ContainerKind::ALL {
            let sole_candidate = {
                let container = grid.container_of(id, kind);
                let mut assignable = container.assignable_members(grid.cells(), digit);
                match (assignable.next(), assignable.next()) {
                    (Some(member), None) => Some(member),
                    _ => None,
                }
            };
            // Only this cell may be placed by its own scan; a hidden
            // single belonging to another cell is found when that cell
            // is visited
            if sole_candidate == Some(id) {
                return grid.assign(id, digit);
            }
        }
    }
    false
}
