//! The live game board: mine placement, reveal, flagging, chording, win
//! detection.
//!
//! Every mutating operation takes raw `i32` coordinates and treats anything
//! invalid (out of bounds, wrong cell state) as a silent no-op, so a
//! controller can forward pointer input without pre-validating it. The one
//! exception is construction: asking for more mines than cells panics.

use tracing::debug;

use crate::rng::BoardRng;
use crate::types::{BoardParams, BoardView, CellView, NeighborCache, Tile};

/// A Minesweeper grid plus the state needed to play it.
///
/// The grid is stored flat in row-major order (`index = y * cols + x`).
/// Coordinates in the public API are `(x, y)` with `(0, 0)` the top-left
/// corner, x growing rightwards and y growing downwards.
#[derive(Clone)]
pub struct Board {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) mine_count: usize,
    pub(crate) tiles: Vec<Tile>,
    pub(crate) neighbors: NeighborCache,
    pub(crate) first_click_done: bool,
    pub(crate) highlight: Option<(usize, usize)>,
    rng: BoardRng,
}

impl Board {
    /// Create a board with mines placed from OS entropy.
    ///
    /// # Panics
    ///
    /// Panics if `params.mines > params.rows * params.cols`.
    pub fn new(params: BoardParams) -> Self {
        Self::with_rng(params, BoardRng::new())
    }

    /// Create a board whose placement, and any first-click relocation, replay
    /// identically for the same seed. The seed also survives [`reset`], so a
    /// seeded board produces the same sequence of games.
    ///
    /// [`reset`]: Board::reset
    ///
    /// # Panics
    ///
    /// Panics if `params.mines > params.rows * params.cols`.
    pub fn seeded(params: BoardParams, seed: u64) -> Self {
        Self::with_rng(params, BoardRng::from_seed(seed))
    }

    fn with_rng(params: BoardParams, rng: BoardRng) -> Self {
        let mut board = Self {
            rows: 0,
            cols: 0,
            mine_count: 0,
            tiles: Vec::new(),
            neighbors: NeighborCache::new(0, 0),
            first_click_done: false,
            highlight: None,
            rng,
        };
        board.reset(params);
        board
    }

    /// Create a board with an explicit mine layout, for scripted games and
    /// tests. Duplicate coordinates collapse to one mine.
    ///
    /// The first-click guarantee stays armed exactly as on a random board,
    /// so the first reveal may still relocate these mines.
    ///
    /// # Panics
    ///
    /// Panics if any mine coordinate is out of bounds.
    pub fn from_mines(rows: usize, cols: usize, mines: &[(usize, usize)]) -> Self {
        let mut board = Self {
            rows,
            cols,
            mine_count: 0,
            tiles: vec![Tile::default(); rows * cols],
            neighbors: NeighborCache::new(rows, cols),
            first_click_done: false,
            highlight: None,
            rng: BoardRng::new(),
        };
        for &(x, y) in mines {
            assert!(
                x < cols && y < rows,
                "mine ({}, {}) outside a {}x{} board",
                x,
                y,
                rows,
                cols
            );
            board.tiles[y * cols + x].mine = true;
        }
        board.mine_count = board.tiles.iter().filter(|t| t.mine).count();
        board.recount_adjacency();
        board
    }

    /// Start a fresh game: clear every tile, place `params.mines` mines
    /// uniformly at random, recompute adjacency and re-arm the first-click
    /// guarantee.
    ///
    /// # Panics
    ///
    /// Panics if `params.mines > params.rows * params.cols`.
    pub fn reset(&mut self, params: BoardParams) {
        self.rows = params.rows;
        self.cols = params.cols;
        self.mine_count = params.mines;
        self.tiles = vec![Tile::default(); params.cell_count()];
        self.neighbors = NeighborCache::new(params.rows, params.cols);
        self.first_click_done = false;
        self.highlight = None;
        self.place_mines();
        self.recount_adjacency();
        debug!(
            "board reset: {}x{} with {} mines",
            params.rows, params.cols, params.mines
        );
    }

    // ─── Coordinates ────────────────────────────────────────────────────────

    /// True if `(x, y)` names a cell on this board.
    #[inline(always)]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.rows
    }

    #[inline(always)]
    pub(crate) fn index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    #[inline(always)]
    pub(crate) fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.cols, index / self.cols)
    }

    // ─── Placement ──────────────────────────────────────────────────────────

    fn place_mines(&mut self) {
        let all: Vec<usize> = (0..self.tiles.len()).collect();
        for home in self.rng.pick(all, self.mine_count) {
            self.tiles[home].mine = true;
        }
    }

    /// Recompute every tile's adjacent-mine count from the current placement.
    /// Mine tiles are pinned at zero.
    fn recount_adjacency(&mut self) {
        for i in 0..self.tiles.len() {
            if self.tiles[i].mine {
                self.tiles[i].adjacent = 0;
                continue;
            }
            let count = self
                .neighbors
                .neighbors(i)
                .iter()
                .filter(|&&n| self.tiles[n].mine)
                .count();
            self.tiles[i].adjacent = count as u8;
        }
    }

    /// First-click safety: move every mine within Chebyshev distance 1 of the
    /// clicked cell to a uniformly random cell outside that neighborhood.
    fn relocate_mines_around(&mut self, clicked: usize) {
        let mut zone = self.neighbors.neighbors(clicked).to_vec();
        zone.push(clicked);

        let doomed: Vec<usize> = zone
            .iter()
            .copied()
            .filter(|&i| self.tiles[i].mine)
            .collect();
        if doomed.is_empty() {
            return;
        }

        let pool: Vec<usize> = (0..self.tiles.len())
            .filter(|&i| !self.tiles[i].mine && !zone.contains(&i))
            .collect();

        // Mine count is conserved even on near-full boards: move only as many
        // mines as there are free cells outside the zone, and leave the rest.
        let moved = doomed.len().min(pool.len());
        let homes = self.rng.pick(pool, moved);
        for k in 0..moved {
            self.tiles[doomed[k]].mine = false;
            self.tiles[homes[k]].mine = true;
        }
        if moved > 0 {
            self.recount_adjacency();
            debug!("first click: relocated {} mines out of the safe zone", moved);
        }
    }

    // ─── Play ───────────────────────────────────────────────────────────────

    /// Reveal the cell at `(x, y)`. Returns `true` iff a mine was hit.
    ///
    /// The very first reveal of a game, whatever its target, relocates any
    /// mines out of the 3x3 neighborhood of the click before anything is
    /// uncovered. Out-of-bounds, already-revealed and flagged targets are
    /// no-ops returning `false`. Revealing a zero-adjacency cell floods
    /// outward across the connected zero region and its numbered border.
    pub fn reveal(&mut self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let index = self.index(x as usize, y as usize);

        if !self.first_click_done {
            self.first_click_done = true;
            self.relocate_mines_around(index);
        }

        if self.tiles[index].revealed || self.tiles[index].flagged {
            return false;
        }
        self.tiles[index].revealed = true;
        if self.tiles[index].mine {
            return true;
        }
        if self.tiles[index].adjacent == 0 {
            self.flood_reveal(index);
        }
        false
    }

    /// Worklist flood fill seeded from a just-revealed zero-adjacency cell.
    /// A zero cell has no mine neighbors, so the cascade cannot walk onto a
    /// mine; flagged cells stop it.
    fn flood_reveal(&mut self, start: usize) {
        let mut pending: Vec<usize> = self.neighbors.neighbors(start).to_vec();
        while let Some(index) = pending.pop() {
            if self.tiles[index].revealed || self.tiles[index].flagged {
                continue;
            }
            self.tiles[index].revealed = true;
            if self.tiles[index].adjacent == 0 {
                pending.extend_from_slice(self.neighbors.neighbors(index));
            }
        }
    }

    /// Toggle the flag on an unrevealed cell. Out-of-bounds and revealed
    /// targets are no-ops.
    pub fn flag(&mut self, x: i32, y: i32) {
        if !self.in_bounds(x, y) {
            return;
        }
        let index = self.index(x as usize, y as usize);
        if !self.tiles[index].revealed {
            self.tiles[index].flagged = !self.tiles[index].flagged;
        }
    }

    /// Chord on a revealed cell: if exactly as many of its neighbors are
    /// flagged as its adjacency number, reveal every unflagged neighbor at
    /// once. Returns `true` iff that exposed a mine, i.e. a flag was wrong.
    ///
    /// Refused (returning `false` with the board untouched) when the target
    /// is out of bounds, hidden, flagged, or its flag count does not match.
    /// A mine exposed by chording is uncovered directly and never cascades.
    pub fn chord(&mut self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let index = self.index(x as usize, y as usize);
        if !self.tiles[index].revealed || self.tiles[index].flagged {
            return false;
        }

        let flags = self
            .neighbors
            .neighbors(index)
            .iter()
            .filter(|&&n| self.tiles[n].flagged)
            .count();
        if flags != self.tiles[index].adjacent as usize {
            return false;
        }

        let mut hit = false;
        for n in self.neighbors.neighbors(index).to_vec() {
            if self.tiles[n].flagged {
                continue;
            }
            if self.tiles[n].mine {
                self.tiles[n].revealed = true;
                hit = true;
            } else {
                let (nx, ny) = self.coords(n);
                self.reveal(nx as i32, ny as i32);
            }
        }
        hit
    }

    /// Expose every unflagged mine, e.g. to paint the board after a loss.
    /// Flagged cells keep their flag and stay covered.
    pub fn reveal_mines(&mut self) {
        for tile in &mut self.tiles {
            if tile.mine && !tile.flagged {
                tile.revealed = true;
            }
        }
    }

    // ─── Queries ────────────────────────────────────────────────────────────

    /// Win condition: every non-mine cell is revealed. Flags play no part.
    pub fn is_cleared(&self) -> bool {
        self.tiles.iter().all(|t| t.mine || t.revealed)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of mines currently on the board.
    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    /// The parameters of the current game, e.g. to replay the same setup.
    pub fn params(&self) -> BoardParams {
        BoardParams::new(self.rows, self.cols, self.mine_count)
    }

    /// True if the cell at `(x, y)` is revealed; `false` out of bounds.
    pub fn is_revealed(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.tiles[self.index(x as usize, y as usize)].revealed
    }

    /// True if the cell at `(x, y)` is flagged; `false` out of bounds.
    pub fn is_flagged(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.tiles[self.index(x as usize, y as usize)].flagged
    }

    /// True if the cell at `(x, y)` holds a mine; `false` out of bounds.
    /// Meant for rendering after the game ends, and for tests; consulting it
    /// mid-game is the caller's cheat to make.
    pub fn is_mine(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.tiles[self.index(x as usize, y as usize)].mine
    }

    /// Number of mines adjacent to the cell at `(x, y)`; 0 out of bounds and
    /// on mine cells.
    pub fn adjacent_mines(&self, x: i32, y: i32) -> u8 {
        if self.in_bounds(x, y) {
            self.tiles[self.index(x as usize, y as usize)].adjacent
        } else {
            0
        }
    }

    /// Number of flags currently placed.
    pub fn flagged_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.flagged).count()
    }

    /// The classic mine counter: total mines minus placed flags. Goes
    /// negative when the player over-flags.
    pub fn mines_remaining(&self) -> isize {
        self.mine_count as isize - self.flagged_count() as isize
    }

    /// The cell the solver last acted on, if its previous step fired a rule.
    pub fn highlighted_cell(&self) -> Option<(i32, i32)> {
        self.highlight.map(|(x, y)| (x as i32, y as i32))
    }

    /// Masked view of one cell; `None` out of bounds. An unrevealed mine
    /// looks exactly like any other hidden cell.
    pub fn cell_view(&self, x: i32, y: i32) -> Option<CellView> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(CellView::from(
            &self.tiles[self.index(x as usize, y as usize)],
        ))
    }

    /// Masked snapshot of the whole board, cells in row-major order.
    pub fn view(&self) -> BoardView {
        BoardView {
            rows: self.rows,
            cols: self.cols,
            mines: self.mine_count,
            flagged: self.flagged_count(),
            cleared: self.is_cleared(),
            highlight: self.highlighted_cell(),
            cells: self.tiles.iter().map(CellView::from).collect(),
        }
    }
}
