use thiserror::Error;

use crate::search::ExplorationOrder;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("malformed grid: {0}")]
    MalformedGrid(String),
    #[error("no path to the goal exploring {order:?}")]
    SearchExhausted { order: ExplorationOrder },
    #[error("search went past {limit} moves without reaching the goal")]
    MoveLimitExceeded { limit: usize },
    #[error("more than {limit} states pending")]
    FringeLimitExceeded { limit: usize },
}
