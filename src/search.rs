use std::rc::Rc;

use crate::error::SolveError;
use crate::grid::{Grid, Location, GOAL, START};
use crate::orientation::Roll;
use crate::state::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExplorationOrder {
    Forward,
    Reversed,
}

impl ExplorationOrder {
    pub fn all() -> [ExplorationOrder; 2] {
        [ExplorationOrder::Forward, ExplorationOrder::Reversed]
    }

    /// Order in which tips are tried (and pushed) at every state.
    pub fn rolls(&self) -> [Roll; 4] {
        let mut rv = Roll::tips();
        if *self == ExplorationOrder::Reversed {
            rv.reverse();
        }
        rv
    }
}

/// Bounds that stop a runaway search on a board that never prunes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_moves: usize,
    pub max_fringe: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            max_moves: 1_000,
            max_fringe: 1_000_000,
        }
    }
}

/// Depth-first search from `start` until a state at `goal` is popped. The
/// first such state wins; it is not necessarily the shortest route.
pub fn find_goal(
    grid: &Grid,
    start: Location,
    goal: Location,
    order: ExplorationOrder,
    limits: &SearchLimits,
) -> Result<Rc<State>, SolveError> {
    let rolls = order.rolls();

    let mut fringe: Vec<Rc<State>> = vec![Rc::new(State::initial_state(start))];
    let mut iteration_count: u64 = 0;
    let mut max_fringe_seen: usize = 1;

    while let Some(state) = fringe.pop() {
        iteration_count += 1;

        if state.location() == goal {
            tracing::debug!(
                ?order,
                iteration_count,
                max_fringe_seen,
                moves = state.move_count(),
                "reached goal"
            );
            return Ok(state);
        }

        if usize::try_from(state.move_count()).map_or(false, |m| m >= limits.max_moves) {
            return Err(SolveError::MoveLimitExceeded {
                limit: limits.max_moves,
            });
        }

        for roll in rolls {
            if let Some(next_state) = state.tip(roll, grid) {
                fringe.push(Rc::new(next_state));
            }
        }

        if fringe.len() > limits.max_fringe {
            return Err(SolveError::FringeLimitExceeded {
                limit: limits.max_fringe,
            });
        }
        max_fringe_seen = max_fringe_seen.max(fringe.len());
    }

    tracing::debug!(?order, iteration_count, max_fringe_seen, "fringe exhausted");
    Err(SolveError::SearchExhausted { order })
}

/// [`find_goal`] on the puzzle's fixed corners, after checking the board.
pub fn find_final(
    grid: &Grid,
    order: ExplorationOrder,
    limits: &SearchLimits,
) -> Result<Rc<State>, SolveError> {
    grid.validate()?;
    find_goal(grid, START, GOAL, order, limits)
}
