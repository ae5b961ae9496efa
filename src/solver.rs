//! The built-in auto-solver: two counting rules, applied one visible step at
//! a time.
//!
//! The solver plays exactly like a careful human on easy ground. Each step
//! scans the grid in row-major order, stops at the first revealed number
//! whose neighborhood forces a conclusion, acts on it, and reports back. It
//! never guesses and never consults hidden mine state, so boards that need
//! probabilistic reasoning simply stall it.

use tracing::trace;

use crate::board::Board;

impl Board {
    /// Run one solver step. Returns `true` iff a rule fired and changed the
    /// board.
    ///
    /// Candidates are revealed non-mine cells, scanned row by row. The first
    /// one whose neighborhood forces a conclusion acts and ends the step:
    ///
    /// 1. every adjacent mine is already flagged: reveal the remaining
    ///    covered neighbors (safe, may cascade);
    /// 2. the covered neighbors are exactly the missing mines: flag them all.
    ///
    /// The firing cell becomes the highlighted cell for UI display. A scan
    /// that fires nothing clears the highlight and returns `false`, which
    /// means either a cleared board or a position these rules cannot crack.
    pub fn solver_step(&mut self) -> bool {
        for y in 0..self.rows {
            for x in 0..self.cols {
                let index = self.index(x, y);
                let tile = self.tiles[index];
                if !tile.revealed || tile.mine {
                    continue;
                }
                self.highlight = Some((x, y));

                let mut flagged = 0usize;
                let mut covered = 0usize;
                for &n in self.neighbors.neighbors(index) {
                    if self.tiles[n].flagged {
                        flagged += 1;
                    } else if !self.tiles[n].revealed {
                        covered += 1;
                    }
                }

                // Rule 1: all mines accounted for, the rest are safe.
                if flagged == tile.adjacent as usize && covered > 0 {
                    for n in self.neighbors.neighbors(index).to_vec() {
                        if !self.tiles[n].revealed && !self.tiles[n].flagged {
                            let (nx, ny) = self.coords(n);
                            self.reveal(nx as i32, ny as i32);
                        }
                    }
                    trace!("solver rule 1 at ({}, {}): opened {} safe cells", x, y, covered);
                    return true;
                }

                // Rule 2: exactly as many covered neighbors as missing mines.
                // Signed, since a player may have over-flagged a number.
                let missing = tile.adjacent as isize - flagged as isize;
                if missing > 0 && covered as isize == missing {
                    for n in self.neighbors.neighbors(index).to_vec() {
                        if !self.tiles[n].revealed && !self.tiles[n].flagged {
                            self.tiles[n].flagged = true;
                        }
                    }
                    trace!("solver rule 2 at ({}, {}): flagged {} mines", x, y, missing);
                    return true;
                }
            }
        }

        self.highlight = None;
        false
    }

    /// Apply solver steps until no rule fires. Returns the number of steps
    /// that changed the board.
    ///
    /// Stalling is normal: the two rules are deliberately shallow, so a
    /// return only means there is no forced move left, not that the board is
    /// cleared. Check [`is_cleared`] afterwards.
    ///
    /// [`is_cleared`]: Board::is_cleared
    pub fn solve(&mut self) -> usize {
        let mut steps = 0;
        while self.solver_step() {
            steps += 1;
        }
        steps
    }
}
