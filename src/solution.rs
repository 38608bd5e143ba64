use std::collections::BTreeSet;

use crate::error::SolveError;
use crate::grid::{Grid, Location};
use crate::search::{find_final, ExplorationOrder, SearchLimits};
use crate::state::{FaceValues, State};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub order: ExplorationOrder,
    /// Start to goal; a cell may appear more than once.
    pub path: Vec<Location>,
    pub visited: BTreeSet<Location>,
    pub face_values: FaceValues,
    pub moves: i64,
    pub score: i64,
    /// Sum over the cells the die never touched.
    pub answer: i64,
}

impl Solution {
    pub fn from_final_state(grid: &Grid, order: ExplorationOrder, state: &State) -> Solution {
        let mut path = state.reverse_path();
        path.reverse();

        let visited: BTreeSet<Location> = path.iter().copied().collect();
        let path_sum: i64 = visited.iter().filter_map(|loc| grid.at(*loc)).sum();

        Solution {
            order,
            path,
            visited,
            face_values: *state.values(),
            moves: state.move_count(),
            score: state.score(),
            answer: grid.total() - path_sum,
        }
    }

    /// Same cells visited and same answer, whatever route got there.
    pub fn agrees_with(&self, other: &Solution) -> bool {
        self.visited == other.visited && self.answer == other.answer
    }

    /// The board with visited cells shown and the rest blanked out.
    pub fn render(&self, grid: &Grid) -> String {
        grid.show(|loc, value| {
            if self.visited.contains(&loc) {
                format!("{:>5}", value)
            } else {
                format!("{:>5}", ".")
            }
        })
    }
}

pub fn solve(
    grid: &Grid,
    order: ExplorationOrder,
    limits: &SearchLimits,
) -> Result<Solution, SolveError> {
    let state = find_final(grid, order, limits)?;
    Ok(Solution::from_final_state(grid, order, &state))
}
