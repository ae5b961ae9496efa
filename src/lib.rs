//! Minesweeper board engine with a rule-based auto-solver.
//!
//! The crate owns everything behind the grid: mine placement with a
//! first-click-safe guarantee, flood-fill reveal, chording, win detection
//! and a deterministic two-rule solver that plays one visible step at a
//! time. Presentation stays outside: a game controller owns a [`Board`],
//! feeds pointer input into it and renders the masked [`BoardView`] it
//! hands back. Invalid input never errors; operations on out-of-bounds or
//! wrong-state cells are silent no-ops.
//!
//! ```
//! use minesweeper_engine::{Board, Difficulty};
//!
//! let mut board = Board::new(Difficulty::Beginner.params());
//! let hit = board.reveal(4, 4);
//! assert!(!hit); // the first click is always safe
//!
//! while board.solver_step() {}
//! let snapshot = board.view();
//! assert_eq!(snapshot.cells.len(), 81);
//! ```

pub mod board;
pub mod rng;
pub mod solver;
pub mod types;

pub use board::Board;
pub use types::{BoardParams, BoardView, CellView, Difficulty};
