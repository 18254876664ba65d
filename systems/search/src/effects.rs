//! Effects triggered when a node enters a cell.

use hex_treasure_core::CellKind;
use hex_treasure_world::{hex, Grid};

use crate::node::SearchNode;

/// Number of extra cells a `Trap 3` pushes the agent along its heading.
const FORCED_STEPS: usize = 2;

/// Multiplier applied by a `Trap 4`. Validity filtering keeps it from firing.
const PROHIBITIVE_ENERGY_FACTOR: f64 = 99_999_999.0;

/// Applies the effect of the cell the node has just entered.
///
/// Runs once per child, after its coordinate and base costs are set and before
/// the heuristic is scored. Cells crossed by a forced push do not trigger
/// their own effects.
pub(crate) fn apply_effect(node: &mut SearchNode, grid: &Grid) {
    let Some(kind) = grid.kind_at(node.cell) else {
        return;
    };

    match kind {
        CellKind::Trap1 => node.energy_multiplier *= 2.0,
        CellKind::Trap2 => node.step_multiplier *= 2.0,
        CellKind::Trap3 => push_forward(node, grid),
        CellKind::Trap4 => node.energy_multiplier *= PROHIBITIVE_ENERGY_FACTOR,
        CellKind::Reward1 => node.energy_multiplier *= 0.5,
        CellKind::Reward2 => node.step_multiplier *= 0.5,
        CellKind::Treasure => {
            let _ = node.treasures.insert(node.cell);
        }
        CellKind::Empty | CellKind::Obstacle => {}
    }
}

/// Moves the node up to [`FORCED_STEPS`] cells along its heading, stopping at
/// the first invalid or unrepresentable cell. Each forced step costs one raw
/// unit of both energy and steps, independent of the multipliers.
fn push_forward(node: &mut SearchNode, grid: &Grid) {
    let Some(direction) = node.direction else {
        return;
    };

    for _ in 0..FORCED_STEPS {
        let Some(next) = hex::transition(node.cell, direction).filter(|next| grid.is_valid(*next))
        else {
            break;
        };

        node.cell = next;
        node.energy_cost += 1.0;
        node.step_cost += 1.0;
    }
}
