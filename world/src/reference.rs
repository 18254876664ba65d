use hex_treasure_core::CellKind::{
    self, Empty, Obstacle, Reward1, Reward2, Trap1, Trap2, Trap3, Treasure,
};

use crate::Grid;

#[rustfmt::skip]
const REFERENCE_LAYOUT: [[CellKind; 10]; 6] = [
    [Empty, Empty, Empty, Empty, Reward1, Empty, Empty, Empty, Empty, Empty],
    [Empty, Trap2, Empty, Trap1, Treasure, Empty, Trap3, Empty, Obstacle, Empty],
    [Empty, Empty, Obstacle, Empty, Obstacle, Empty, Empty, Reward2, Trap1, Empty],
    [Obstacle, Reward1, Empty, Obstacle, Empty, Trap3, Obstacle, Treasure, Empty, Treasure],
    [Empty, Empty, Trap2, Treasure, Obstacle, Empty, Obstacle, Obstacle, Empty, Empty],
    [Empty, Empty, Empty, Empty, Empty, Reward2, Empty, Empty, Empty, Empty],
];

/// Six-row, ten-column demonstration map holding four treasures.
///
/// Searched from `(0, 0)`, this is the canonical scenario the engine is
/// regression-tested against.
#[must_use]
pub fn reference_grid() -> Grid {
    Grid::new(REFERENCE_LAYOUT.iter().map(|row| row.to_vec()).collect())
}
