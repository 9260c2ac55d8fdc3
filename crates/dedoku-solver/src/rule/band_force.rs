//! Band-forced placement: propagating a solved value into sibling
//! containers.

use dedoku_core::{CellId, ContainerKind, Grid};

/// Pushes a solved cell's value into its band siblings on one axis,
/// returning `true` if a placement was made.
///
/// The cell's container on `axis` sits in a band of three index-adjacent
/// containers. Of the two siblings, keep those that do not already contain
/// the cell's value; if exactly one remains and exactly one of its members
/// could take the value, assign it there. Any other cardinality does
/// nothing. No-op for unsolved cells.
///
/// Eligibility is judged against the members' current exclusion sets,
/// which are refreshed only by the unsolved-cell pass; the rule works with
/// whatever the last pass left behind.
pub fn forced_placement(grid: &mut Grid, id: CellId, axis: ContainerKind) -> bool {
    let Some(digit) = grid.cell(id).value() else {
        return false;
    };

    let target = {
        let own_index = grid.cell(id).container_index(axis);
        let siblings = grid.band_siblings(axis, own_index);
        let mut missing = siblings
            .into_iter()
            .filter(|container| !container.contains_value(grid.cells(), digit));
        let sole_container = match (missing.next(), missing.next()) {
            (Some(container), None) => container,
            _ => return false,
        };
        let mut assignable = sole_container.assignable_members(grid.cells(), digit);
        match (assignable.next(), assignable.next()) {
            (Some(member), None) => member,
            _ => return false,
        }
    };
    grid.assign(target, digit)
}
