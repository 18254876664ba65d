//! Offset-hex transition model.
//!
//! The grid is an "even-q" layout: every column is a vertical strip of hexes
//! and odd columns sit half a cell higher than even ones. North and south stay
//! in the column, while each diagonal crosses into a neighbouring column with a
//! row shift that depends on the parity of the column being left.

use hex_treasure_core::{CellCoord, Direction};

use crate::Grid;

/// Row and column deltas for a move leaving an odd column.
const ODD_COLUMN_OFFSETS: [(i32, i32); 6] = [
    (-1, 0),  // N
    (-1, 1),  // NE
    (0, 1),   // SE
    (1, 0),   // S
    (0, -1),  // SW
    (-1, -1), // NW
];

/// Row and column deltas for a move leaving an even column.
const EVEN_COLUMN_OFFSETS: [(i32, i32); 6] = [
    (-1, 0), // N
    (0, 1),  // NE
    (1, 1),  // SE
    (1, 0),  // S
    (1, -1), // SW
    (0, -1), // NW
];

/// Returns the cell reached by stepping once in `direction`, or `None` when
/// the step would overflow the coordinate range.
///
/// No bounds or passability checks happen here; callers filter the result
/// through [`Grid::is_valid`].
#[must_use]
pub fn transition(cell: CellCoord, direction: Direction) -> Option<CellCoord> {
    let table = if cell.in_odd_column() {
        &ODD_COLUMN_OFFSETS
    } else {
        &EVEN_COLUMN_OFFSETS
    };
    let (row_delta, column_delta) = table[offset_index(direction)];
    cell.offset(row_delta, column_delta)
}

/// Enumerates the enterable neighbours of a cell in expansion order.
pub fn valid_neighbors(
    grid: &Grid,
    cell: CellCoord,
) -> impl Iterator<Item = (Direction, CellCoord)> + '_ {
    Direction::ALL
        .into_iter()
        .filter_map(move |direction| {
            transition(cell, direction)
                .filter(|neighbor| grid.is_valid(*neighbor))
                .map(|neighbor| (direction, neighbor))
        })
}

const fn offset_index(direction: Direction) -> usize {
    match direction {
        Direction::North => 0,
        Direction::NorthEast => 1,
        Direction::SouthEast => 2,
        Direction::South => 3,
        Direction::SouthWest => 4,
        Direction::NorthWest => 5,
    }
}
