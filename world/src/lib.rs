#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Static hex grid model for the treasure search.
//!
//! The world owns the immutable cell layout, answers validity questions for
//! the search system and exposes the offset-hex transition model through
//! [`hex`]. It never changes once built.

pub mod hex;
mod reference;

use hex_treasure_core::{CellCoord, CellKind, GridError};

pub use reference::reference_grid;

/// Immutable grid of hex cells addressed as `rows[row][column]`.
///
/// Rows are expected to share one length. Ragged input can still be built and
/// queried, with a column past the end of a short row reading as out of
/// bounds, but the search refuses to run on it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<CellKind>>,
    treasures: Vec<CellCoord>,
}

impl Grid {
    /// Creates a grid from rows of cell kinds.
    #[must_use]
    pub fn new(rows: Vec<Vec<CellKind>>) -> Self {
        let treasures = collect_treasures(&rows);
        Self { rows, treasures }
    }

    /// Builds a grid from textual cell labels, where `None` marks an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnknownLabel`] for the first label outside the
    /// closed set of cell kinds.
    pub fn from_labels<S>(labels: &[Vec<Option<S>>]) -> Result<Self, GridError>
    where
        S: AsRef<str>,
    {
        let mut rows = Vec::with_capacity(labels.len());
        for (row_index, row) in labels.iter().enumerate() {
            let mut cells = Vec::with_capacity(row.len());
            for (column_index, label) in row.iter().enumerate() {
                let kind = match label {
                    None => CellKind::Empty,
                    Some(text) => CellKind::from_label(text.as_ref()).ok_or_else(|| {
                        GridError::UnknownLabel {
                            row: row_index,
                            column: column_index,
                            label: text.as_ref().to_owned(),
                        }
                    })?,
                };
                cells.push(kind);
            }
            rows.push(cells);
        }
        Ok(Self::new(rows))
    }

    /// Number of rows in the grid.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the first row, which the grid treats as its nominal width.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Reports whether every row has the same length.
    #[must_use]
    pub fn is_rectangular(&self) -> bool {
        let width = self.column_count();
        self.rows.iter().all(|row| row.len() == width)
    }

    /// Cell kind stored at the coordinate, or `None` when out of bounds.
    #[must_use]
    pub fn kind_at(&self, cell: CellCoord) -> Option<CellKind> {
        let row = usize::try_from(cell.row()).ok()?;
        let column = usize::try_from(cell.column()).ok()?;
        self.rows.get(row)?.get(column).copied()
    }

    /// Reports whether the coordinate lies in bounds on an enterable cell.
    #[must_use]
    pub fn is_valid(&self, cell: CellCoord) -> bool {
        self.kind_at(cell).is_some_and(CellKind::is_passable)
    }

    /// Treasure cells in row-major order.
    #[must_use]
    pub fn treasures(&self) -> &[CellCoord] {
        &self.treasures
    }
}

fn collect_treasures(rows: &[Vec<CellKind>]) -> Vec<CellCoord> {
    let mut treasures = Vec::new();
    for (row_index, row) in rows.iter().enumerate() {
        for (column_index, kind) in row.iter().enumerate() {
            if *kind != CellKind::Treasure {
                continue;
            }

            let (Ok(row), Ok(column)) = (i32::try_from(row_index), i32::try_from(column_index))
            else {
                continue;
            };
            treasures.push(CellCoord::new(row, column));
        }
    }
    treasures
}
