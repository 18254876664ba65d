//! Sorted frontier with dominance deduplication.

use std::collections::VecDeque;

use crate::node::SearchNode;

/// Result of offering a node to the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Admission {
    /// The node was queued and no entry shared its state.
    Inserted,
    /// The node replaced a strictly worse entry for the same state.
    Replaced,
    /// An entry for the same state was at least as good; the node was dropped.
    Dominated,
}

/// Not-yet-expanded nodes ordered by ascending `energy_cost + heuristic`.
///
/// Holds at most one node per state key. Equal priorities keep insertion
/// order, so a newcomer lands after every entry that is no worse than it.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    entries: VecDeque<SearchNode>,
}

impl Frontier {
    pub(crate) fn with_root(root: SearchNode) -> Self {
        let mut entries = VecDeque::new();
        entries.push_back(root);
        Self { entries }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Removes the node with the lowest priority.
    pub(crate) fn pop(&mut self) -> Option<SearchNode> {
        self.entries.pop_front()
    }

    /// Offers a node, keeping the cheaper of any two entries for one state.
    pub(crate) fn insert(&mut self, node: SearchNode) -> Admission {
        let priority = node.priority();
        let mut admission = Admission::Inserted;

        if let Some(index) = self.entries.iter().position(|entry| entry.same_state(&node)) {
            if self.entries[index].priority() <= priority {
                return Admission::Dominated;
            }
            let _ = self.entries.remove(index);
            admission = Admission::Replaced;
        }

        let position = self
            .entries
            .iter()
            .position(|entry| entry.priority() > priority)
            .unwrap_or(self.entries.len());
        self.entries.insert(position, node);
        admission
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_treasure_core::CellCoord;

    fn node_at(row: i32, column: i32, energy: f64) -> SearchNode {
        let mut node = SearchNode::root(CellCoord::new(row, column));
        node.energy_cost = energy;
        node
    }

    fn drain(frontier: &mut Frontier) -> Vec<(CellCoord, f64)> {
        let mut order = Vec::new();
        while let Some(node) = frontier.pop() {
            order.push((node.cell, node.priority()));
        }
        order
    }

    #[test]
    fn pops_in_ascending_priority() {
        let mut frontier = Frontier::default();
        for (column, energy) in [(0, 3.0), (1, 1.0), (2, 2.0)] {
            assert_eq!(frontier.insert(node_at(0, column, energy)), Admission::Inserted);
        }

        let order = drain(&mut frontier);
        assert_eq!(
            order,
            vec![
                (CellCoord::new(0, 1), 1.0),
                (CellCoord::new(0, 2), 2.0),
                (CellCoord::new(0, 0), 3.0),
            ]
        );
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut frontier = Frontier::default();
        for column in 0..3 {
            let _ = frontier.insert(node_at(0, column, 1.0));
        }

        let cells: Vec<_> = drain(&mut frontier).into_iter().map(|(cell, _)| cell).collect();
        assert_eq!(
            cells,
            vec![CellCoord::new(0, 0), CellCoord::new(0, 1), CellCoord::new(0, 2)]
        );
    }

    #[test]
    fn priority_includes_heuristic() {
        let mut frontier = Frontier::default();
        let mut far = node_at(0, 0, 1.0);
        far.heuristic = 5.0;
        let _ = frontier.insert(far);
        let _ = frontier.insert(node_at(0, 1, 2.0));

        assert_eq!(frontier.pop().map(|node| node.cell), Some(CellCoord::new(0, 1)));
    }

    #[test]
    fn cheaper_duplicate_replaces_existing_entry() {
        let mut frontier = Frontier::default();
        let _ = frontier.insert(node_at(0, 0, 1.5));
        let _ = frontier.insert(node_at(1, 1, 4.0));

        assert_eq!(frontier.insert(node_at(1, 1, 1.0)), Admission::Replaced);
        assert_eq!(frontier.len(), 2);
        assert_eq!(
            drain(&mut frontier),
            vec![(CellCoord::new(1, 1), 1.0), (CellCoord::new(0, 0), 1.5)]
        );
    }

    #[test]
    fn equal_or_worse_duplicate_is_dropped() {
        let mut frontier = Frontier::with_root(node_at(2, 2, 3.0));

        assert_eq!(frontier.insert(node_at(2, 2, 3.0)), Admission::Dominated);
        assert_eq!(frontier.insert(node_at(2, 2, 7.0)), Admission::Dominated);
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn different_treasure_sets_are_distinct_states() {
        let mut frontier = Frontier::default();
        let _ = frontier.insert(node_at(1, 1, 1.0));
        let mut holding = node_at(1, 1, 5.0);
        let _ = holding.treasures.insert(CellCoord::new(1, 1));

        assert_eq!(frontier.insert(holding), Admission::Inserted);
        assert_eq!(frontier.len(), 2);
    }
}
