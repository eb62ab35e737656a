//! Solver for "Rush Hour"-style block-sliding puzzles.
//!
//! A puzzle is a fixed-size grid of rectangular vehicles, each constrained
//! to slide along one axis. The solver finds a shortest sequence of moves
//! that frees the goal vehicle through the board's right edge, or reports
//! that no such sequence exists.
//!
//! [`Puzzle::parse`] loads and validates the textual format, [`solve`] runs
//! the best-first search, and [`render_path`] prints the resulting states as
//! labeled grids. The [`editdist`] module is an unrelated bundled utility.

pub mod editdist;
mod parse;
mod render;
mod search;
mod state;
mod vehicle;

pub use parse::{ParseError, Puzzle, GOAL_NAME};
pub use render::{render_path, render_state};
pub use search::{solve, Solution, SolveError};
pub use state::{State, StateId, Vehicles};
pub use vehicle::{Direction, Vehicle};
