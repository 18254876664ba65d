//! Straight-line estimate of the distance to the nearest outstanding treasure.

use std::collections::BTreeSet;

use hex_treasure_core::CellCoord;

/// Distance from `cell` to the closest treasure not yet collected.
///
/// Returns zero when every treasure is already held.
pub(crate) fn estimate(
    cell: CellCoord,
    treasures: &[CellCoord],
    collected: &BTreeSet<CellCoord>,
) -> f64 {
    treasures
        .iter()
        .filter(|treasure| !collected.contains(*treasure))
        .map(|treasure| hypotenuse(cell, *treasure))
        .reduce(f64::min)
        .unwrap_or(0.0)
}

/// Euclidean distance with the half-row correction for odd target columns.
///
/// Odd columns sit half a cell higher than even ones, so the row delta toward
/// a treasure in an odd column is shortened by one half before squaring.
fn hypotenuse(from: CellCoord, to: CellCoord) -> f64 {
    let mut row_delta = f64::from(to.row()) - f64::from(from.row());
    if to.in_odd_column() {
        row_delta -= 0.5;
    }
    let column_delta = f64::from(to.column()) - f64::from(from.column());
    (row_delta * row_delta + column_delta * column_delta).sqrt()
}
