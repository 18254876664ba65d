//! Search nodes and the arena that keeps the expanded tree.

use std::collections::BTreeSet;

use hex_treasure_core::{CellCoord, Direction, PathStep};

/// Index of an expanded node inside the [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// Identity used to deduplicate search states.
///
/// Two nodes on the same cell holding the same treasures are one logical
/// state, whatever their cost or multiplier history.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct StateKey {
    cell: CellCoord,
    treasures: BTreeSet<CellCoord>,
}

/// One node of the search tree.
///
/// Nodes are built by value from their parent and mutated only while the
/// expansion step applies the entered cell's effect.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SearchNode {
    pub(crate) cell: CellCoord,
    pub(crate) direction: Option<Direction>,
    pub(crate) energy_cost: f64,
    pub(crate) step_cost: f64,
    pub(crate) heuristic: f64,
    pub(crate) treasures: BTreeSet<CellCoord>,
    pub(crate) energy_multiplier: f64,
    pub(crate) step_multiplier: f64,
    pub(crate) parent: Option<NodeId>,
}

impl SearchNode {
    /// Root node: zero costs, unit multipliers, nothing collected.
    pub(crate) fn root(cell: CellCoord) -> Self {
        Self {
            cell,
            direction: None,
            energy_cost: 0.0,
            step_cost: 0.0,
            heuristic: 0.0,
            treasures: BTreeSet::new(),
            energy_multiplier: 1.0,
            step_multiplier: 1.0,
            parent: None,
        }
    }

    /// Child reached by moving from `self` to `cell` in `direction`.
    ///
    /// Each cost grows by one unit scaled by the parent's multiplier; the
    /// multipliers and treasures are copied before any effect runs.
    pub(crate) fn child(&self, parent: NodeId, direction: Direction, cell: CellCoord) -> Self {
        Self {
            cell,
            direction: Some(direction),
            energy_cost: self.energy_cost + self.energy_multiplier,
            step_cost: self.step_cost + self.step_multiplier,
            heuristic: 0.0,
            treasures: self.treasures.clone(),
            energy_multiplier: self.energy_multiplier,
            step_multiplier: self.step_multiplier,
            parent: Some(parent),
        }
    }

    /// Frontier ordering key. Step cost does not take part.
    pub(crate) fn priority(&self) -> f64 {
        self.energy_cost + self.heuristic
    }

    pub(crate) fn state_key(&self) -> StateKey {
        StateKey {
            cell: self.cell,
            treasures: self.treasures.clone(),
        }
    }

    pub(crate) fn same_state(&self, other: &Self) -> bool {
        self.cell == other.cell && self.treasures == other.treasures
    }

    fn to_step(&self) -> PathStep {
        PathStep {
            cell: self.cell,
            direction: self.direction,
            energy_cost: self.energy_cost,
            step_cost: self.step_cost,
            energy_multiplier: self.energy_multiplier,
            step_multiplier: self.step_multiplier,
            treasures_collected: self.treasures.len(),
        }
    }
}

/// Append-only storage for expanded nodes.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub(crate) fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    /// Walks parent links from `id` back to the root and returns the steps in
    /// travel order.
    pub(crate) fn path_to(&self, id: NodeId) -> Vec<PathStep> {
        let mut steps = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id);
            steps.push(node.to_step());
            current = node.parent;
        }
        steps.reverse();
        steps
    }
}
