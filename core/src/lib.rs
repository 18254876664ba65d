#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the hex treasure search engine.
//!
//! This crate defines the vocabulary that connects the grid model, the search
//! system and adapters. The world crate stores [`CellKind`] values addressed by
//! [`CellCoord`], the search system consumes a [`SearchConfig`] and produces a
//! [`SearchOutcome`] whose path is a sequence of [`PathStep`] values, and
//! adapters only ever translate between these types and their own surfaces.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Location of a single hex cell expressed as row and column indices.
///
/// Rows index the outer dimension of the grid and columns the inner one, so a
/// cell lives at `grid[row][column]`. Both components are signed so that
/// transitions stepping past the top or left edge stay representable until the
/// grid rejects them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    row: i32,
    column: i32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> i32 {
        self.row
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> i32 {
        self.column
    }

    /// Reports whether the cell sits in an odd column.
    ///
    /// Column parity selects the offset table used for hex adjacency and the
    /// horizontal correction applied by the distance heuristic.
    #[must_use]
    pub const fn in_odd_column(&self) -> bool {
        self.column.rem_euclid(2) == 1
    }

    /// Returns the coordinate shifted by the provided row and column deltas,
    /// or `None` when either component would leave the `i32` range.
    #[must_use]
    pub fn offset(self, row_delta: i32, column_delta: i32) -> Option<Self> {
        let row = self.row.checked_add(row_delta)?;
        let column = self.column.checked_add(column_delta)?;
        Some(Self::new(row, column))
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Compass directions available when stepping between hex cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices within the same column.
    North,
    /// Movement into the next column on its upper side.
    NorthEast,
    /// Movement into the next column on its lower side.
    SouthEast,
    /// Movement toward increasing row indices within the same column.
    South,
    /// Movement into the previous column on its lower side.
    SouthWest,
    /// Movement into the previous column on its upper side.
    NorthWest,
}

impl Direction {
    /// Every direction in expansion order.
    ///
    /// The order fixes how equal-priority children are queued, so it is part
    /// of the engine's deterministic contract.
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Short compass label of the direction.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::NorthWest => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed set of cell kinds a grid may contain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Plain cell without any effect.
    #[default]
    Empty,
    /// Impassable cell.
    Obstacle,
    /// Cell that counts toward the goal once entered.
    Treasure,
    /// Doubles the energy multiplier.
    Trap1,
    /// Doubles the step multiplier.
    Trap2,
    /// Pushes the agent two further cells in its direction of travel.
    Trap3,
    /// Impassable trap that would otherwise make energy prohibitively expensive.
    Trap4,
    /// Halves the energy multiplier.
    Reward1,
    /// Halves the step multiplier.
    Reward2,
}

impl CellKind {
    /// Parses one of the grid labels, returning `None` for unknown text.
    ///
    /// Labels match the grid files: `"Empty"`, `"Obstacle"`, `"Treasure"`,
    /// `"Trap 1"` through `"Trap 4"`, `"Reward 1"` and `"Reward 2"`. An empty
    /// string is read as [`CellKind::Empty`].
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let kind = match label.trim() {
            "" | "Empty" => Self::Empty,
            "Obstacle" => Self::Obstacle,
            "Treasure" => Self::Treasure,
            "Trap 1" => Self::Trap1,
            "Trap 2" => Self::Trap2,
            "Trap 3" => Self::Trap3,
            "Trap 4" => Self::Trap4,
            "Reward 1" => Self::Reward1,
            "Reward 2" => Self::Reward2,
            _ => return None,
        };
        Some(kind)
    }

    /// Canonical label of the kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Obstacle => "Obstacle",
            Self::Treasure => "Treasure",
            Self::Trap1 => "Trap 1",
            Self::Trap2 => "Trap 2",
            Self::Trap3 => "Trap 3",
            Self::Trap4 => "Trap 4",
            Self::Reward1 => "Reward 1",
            Self::Reward2 => "Reward 2",
        }
    }

    /// Reports whether an agent may ever enter a cell of this kind.
    ///
    /// Obstacles and `Trap 4` cells are never enterable.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Obstacle | Self::Trap4)
    }
}

/// Errors raised while building a grid from its textual labels.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// A cell carried a label outside the closed set of kinds.
    #[error("unknown cell label '{label}' at row {row}, column {column}")]
    UnknownLabel {
        /// Row containing the offending cell.
        row: usize,
        /// Column containing the offending cell.
        column: usize,
        /// Label that could not be recognised.
        label: String,
    },
}

/// Reasons a search request may be rejected before any expansion happens.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The start cell lies outside the grid or on an impassable cell.
    #[error("start cell {cell} is out of bounds or impassable")]
    InvalidStart {
        /// Start cell supplied with the request.
        cell: CellCoord,
    },
}

/// Controls how the engine treats a start cell that could never be entered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StartPolicy {
    /// Accept the start as given and let the search degrade to "no path".
    #[default]
    Accept,
    /// Fail fast with [`SearchError::InvalidStart`].
    Reject,
}

/// Tunables applied to a single search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Handling of impassable or out-of-bounds start cells.
    pub start_policy: StartPolicy,
    /// Number of treasures that satisfies the goal; `None` requires every
    /// treasure present in the grid.
    pub required_treasures: Option<usize>,
    /// Maximum number of expansions before the search gives up.
    pub expansion_limit: Option<usize>,
}

/// One entry of a reconstructed path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathStep {
    /// Cell occupied after the move, including any forced movement.
    pub cell: CellCoord,
    /// Direction taken to reach the cell; `None` for the start.
    pub direction: Option<Direction>,
    /// Cumulative energy spent to reach the cell.
    pub energy_cost: f64,
    /// Cumulative step cost spent to reach the cell.
    pub step_cost: f64,
    /// Energy multiplier in force after the cell's effect was applied.
    pub energy_multiplier: f64,
    /// Step multiplier in force after the cell's effect was applied.
    pub step_multiplier: f64,
    /// Number of distinct treasures collected so far.
    pub treasures_collected: usize,
}

/// Terminal state reached by a search run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchStatus {
    /// A node holding the required treasures was expanded.
    Goal,
    /// The frontier drained, or the expansion limit was hit, before the goal.
    Exhausted,
}

/// Counters describing the work performed by a search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes popped from the frontier.
    pub expanded: usize,
    /// Child nodes built from valid neighbours.
    pub generated: usize,
    /// Children rejected as already explored or dominated by a frontier entry.
    pub discarded: usize,
    /// Nodes still waiting in the frontier when the search ended.
    pub frontier_remaining: usize,
}

/// Result produced by a search run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Terminal state of the run.
    pub status: SearchStatus,
    /// Steps from the start to the goal; empty unless the goal was reached.
    pub path: Vec<PathStep>,
    /// Work counters collected during the run.
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Reports whether the search reached its goal.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.status == SearchStatus::Goal
    }

    /// Final step of the path, if any.
    #[must_use]
    pub fn last_step(&self) -> Option<&PathStep> {
        self.path.last()
    }
}
