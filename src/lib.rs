//! Solver for the "Die Agony" puzzle: a die with unknown face values rolls
//! from the bottom-left to the top-right of a 6x6 board, and each cell shows
//! the running total of `move number * top face value`. Find the route and
//! the face values, then sum the cells the die never visited.

pub mod error;
pub mod faces;
pub mod grid;
pub mod orientation;
pub mod search;
pub mod solution;
pub mod state;

pub use error::SolveError;
pub use grid::{Grid, Location, GOAL, START};
pub use search::{find_final, find_goal, ExplorationOrder, SearchLimits};
pub use solution::{solve, Solution};
