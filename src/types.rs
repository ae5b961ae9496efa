//! Core data types: board parameters, per-tile state, masked views and the
//! precomputed neighbor table.

use serde::{Deserialize, Serialize};

/// Internal per-cell state. Only masked projections of this ever leave the
/// crate; see [`CellView`].
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Tile {
    pub mine: bool,
    pub revealed: bool,
    pub flagged: bool,
    /// Mines in the 8-neighborhood, 0..=8. Pinned at zero on mine tiles.
    pub adjacent: u8,
}

/// Grid dimensions and mine count for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardParams {
    pub rows: usize,
    pub cols: usize,
    pub mines: usize,
}

impl BoardParams {
    pub fn new(rows: usize, cols: usize, mines: usize) -> Self {
        Self { rows, cols, mines }
    }

    /// Total number of cells in the grid.
    #[inline(always)]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// The classic preset ladder, plus an escape hatch for arbitrary grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
    Custom { rows: usize, cols: usize, mines: usize },
}

impl Difficulty {
    /// Board parameters for this difficulty.
    pub fn params(self) -> BoardParams {
        match self {
            Difficulty::Beginner => BoardParams::new(9, 9, 10),
            Difficulty::Intermediate => BoardParams::new(16, 16, 40),
            Difficulty::Expert => BoardParams::new(16, 30, 99),
            Difficulty::Custom { rows, cols, mines } => BoardParams::new(rows, cols, mines),
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Intermediate
    }
}

impl From<Difficulty> for BoardParams {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.params()
    }
}

/// What a player is allowed to see of one cell.
///
/// `Mine` only ever appears for revealed mines; a covered mine serializes as
/// plain `Hidden`, so a snapshot never leaks the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed { adjacent: u8 },
    Mine,
}

impl From<&Tile> for CellView {
    fn from(tile: &Tile) -> Self {
        if tile.revealed {
            if tile.mine {
                CellView::Mine
            } else {
                CellView::Revealed {
                    adjacent: tile.adjacent,
                }
            }
        } else if tile.flagged {
            CellView::Flagged
        } else {
            CellView::Hidden
        }
    }
}

/// Full masked snapshot of a board, cells flat in row-major order.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub rows: usize,
    pub cols: usize,
    pub mines: usize,
    pub flagged: usize,
    pub cleared: bool,
    pub highlight: Option<(i32, i32)>,
    pub cells: Vec<CellView>,
}

/// Precomputed neighbor table: for every cell, the flat indices of its
/// in-bounds neighbors. Built once per board shape so the hot loops never
/// redo the bounds arithmetic.
#[derive(Clone)]
pub struct NeighborCache {
    /// Neighbor indices for all cells, concatenated.
    data: Vec<usize>,
    /// Start of each cell's slice in `data`, with a trailing sentinel.
    offsets: Vec<usize>,
}

impl NeighborCache {
    pub fn new(rows: usize, cols: usize) -> Self {
        let total = rows * cols;
        let mut data = Vec::with_capacity(total * 8);
        let mut offsets = Vec::with_capacity(total + 1);

        for y in 0..rows {
            for x in 0..cols {
                offsets.push(data.len());
                for dy in -1i32..=1 {
                    for dx in -1i32..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let nx = x as i32 + dx;
                        let ny = y as i32 + dy;
                        if nx >= 0 && ny >= 0 && (nx as usize) < cols && (ny as usize) < rows {
                            data.push(ny as usize * cols + nx as usize);
                        }
                    }
                }
            }
        }
        offsets.push(data.len());

        Self { data, offsets }
    }

    /// Neighbors of the cell at `index`, as flat indices.
    #[inline(always)]
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.data[self.offsets[index]..self.offsets[index + 1]]
    }
}
