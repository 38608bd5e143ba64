use std::rc::Rc;

use crate::faces::{top_face, NUMBER_OF_FACES};
use crate::grid::{Grid, Location};
use crate::orientation::{Orientation, Roll};

pub type FaceValues = [Option<i64>; NUMBER_OF_FACES];

/// One node of the search. Never modified once built; children hold their
/// parent through `predecessor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    values: FaceValues,
    location: Location,
    orientation: Orientation,
    score: i64,
    move_count: i64,
    predecessor: Option<Rc<State>>,
}

impl State {
    pub fn initial_state(location: Location) -> State {
        State {
            values: [None; NUMBER_OF_FACES],
            location,
            orientation: Orientation::canonical(),
            score: 0,
            move_count: 0,
            predecessor: None,
        }
    }

    pub fn values(&self) -> &FaceValues {
        &self.values
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn move_count(&self) -> i64 {
        self.move_count
    }

    pub fn predecessor(&self) -> Option<&Rc<State>> {
        self.predecessor.as_ref()
    }

    /// Tips the die one cell over. `None` if it would leave the board, or if
    /// the face that lands on top can't account for the number on the new
    /// cell. Spins are not tips and always give `None`.
    pub fn tip(self: &Rc<Self>, roll: Roll, grid: &Grid) -> Option<State> {
        if !roll.is_tip() {
            return None;
        }
        let location = self.location.step(roll);
        let target = *grid.at(location)?;

        let orientation = self.orientation.tip(roll);
        let move_count = self.move_count + 1;
        let top = top_face(&orientation);

        let values = match self.values[top] {
            None => {
                // First time this face is on top: the cell tells us its value.
                let gained = target.checked_sub(self.score)?;
                if gained.rem_euclid(move_count) != 0 {
                    return None;
                }
                let mut values = self.values;
                values[top] = Some(gained.div_euclid(move_count));
                values
            }
            Some(value) => {
                let score = move_count
                    .checked_mul(value)
                    .and_then(|gained| self.score.checked_add(gained))?;
                if score != target {
                    return None;
                }
                self.values
            }
        };

        Some(State {
            values,
            location,
            orientation,
            score: target,
            move_count,
            predecessor: Some(Rc::clone(self)),
        })
    }

    /// Locations from this state back to the start, most recent first.
    pub fn reverse_path(&self) -> Vec<Location> {
        let mut rv = vec![self.location];
        let mut prev = self.predecessor.as_deref();
        while let Some(state) = prev {
            rv.push(state.location);
            prev = state.predecessor.as_deref();
        }
        rv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{GOAL, START};

    fn start() -> Rc<State> {
        Rc::new(State::initial_state(START))
    }

    #[test]
    fn cannot_tip_off_the_board() {
        let grid = Grid::puzzle();
        let s = start();
        assert!(s.tip(Roll::Down, &grid).is_none());
        assert!(s.tip(Roll::Left, &grid).is_none());

        let corner = Rc::new(State::initial_state(GOAL));
        assert!(corner.tip(Roll::Up, &grid).is_none());
        assert!(corner.tip(Roll::Right, &grid).is_none());
    }

    #[test]
    fn first_tip_resolves_the_new_top_face() {
        let grid = Grid::puzzle();
        let s = start();

        // (4, 0) shows 5 after one move.
        let up = s.tip(Roll::Up, &grid).unwrap();
        assert_eq!(up.location(), Location::new(4, 0));
        assert_eq!(up.move_count(), 1);
        assert_eq!(up.score(), 5);
        assert_eq!(up.values(), &[None, None, None, Some(5), None, None]);
        assert_eq!(up.predecessor(), Some(&s));

        let right = s.tip(Roll::Right, &grid).unwrap();
        assert_eq!(right.score(), 77);
        assert_eq!(right.values()[4], Some(77));
    }

    #[test]
    fn indivisible_gain_is_pruned() {
        // From (4, 0), (3, 0) now needs (-8 - 5) / 2 and (4, 1) still needs
        // (23 - 5) / 2.
        let grid = puzzle_with(&[((3, 0), -8)]);

        let up = Rc::new(start().tip(Roll::Up, &grid).unwrap());
        assert!(up.tip(Roll::Up, &grid).is_none());
        let right = up.tip(Roll::Right, &grid).unwrap();
        assert_eq!(right.score(), 23);
        assert_eq!(right.values()[4], Some(9));
    }

    #[test]
    fn known_face_must_match_the_cell() {
        let grid = Grid::puzzle();
        let up = Rc::new(start().tip(Roll::Up, &grid).unwrap());
        let right = Rc::new(up.tip(Roll::Right, &grid).unwrap());
        assert_eq!(right.values(), &[None, None, None, Some(5), Some(9), None]);

        // Face 3 comes back up: 23 + 3 * 5 = 38, but the cell says 5.
        assert!(right.tip(Roll::Left, &grid).is_none());
    }

    #[test]
    fn known_face_advances_the_score() {
        let grid = Grid::puzzle();
        let mut s = start();
        for roll in [Roll::Up, Roll::Right, Roll::Right, Roll::Down] {
            s = Rc::new(s.tip(roll, &grid).unwrap());
        }
        assert_eq!(s.location(), Location::new(5, 2));
        assert_eq!(s.values(), &[None, Some(-9), None, Some(5), Some(9), Some(9)]);

        // Face 4 is on top again: 32 + 5 * 9 = 77.
        let left = s.tip(Roll::Left, &grid).unwrap();
        assert_eq!(left.score(), 77);
        assert_eq!(left.values(), s.values());
    }

    fn puzzle_with(changes: &[((usize, usize), i64)]) -> Grid {
        let mut rows: Vec<Vec<i64>> = Grid::puzzle()
            .values()
            .chunks(6)
            .map(|r| r.to_vec())
            .collect();
        for ((row, col), value) in changes {
            rows[*row][*col] = *value;
        }
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn overflowing_gain_is_pruned() {
        // -2^63 - 5 doesn't fit.
        let grid = puzzle_with(&[((3, 0), i64::MIN)]);
        let up = Rc::new(start().tip(Roll::Up, &grid).unwrap());
        assert_eq!(up.score(), 5);
        assert!(up.tip(Roll::Up, &grid).is_none());
    }

    #[test]
    fn overflowing_score_is_pruned() {
        // Face 3 resolves to i64::MAX, and comes back up on move 3.
        let grid = puzzle_with(&[((4, 0), i64::MAX), ((4, 1), i64::MAX - 2)]);
        let up = Rc::new(start().tip(Roll::Up, &grid).unwrap());
        assert_eq!(up.values()[3], Some(i64::MAX));
        let right = Rc::new(up.tip(Roll::Right, &grid).unwrap());
        assert_eq!(right.values()[4], Some(-1));
        assert!(right.tip(Roll::Left, &grid).is_none());
    }

    #[test]
    fn spins_are_not_tips() {
        let grid = Grid::puzzle();
        let s = start();
        assert!(s.tip(Roll::Cw, &grid).is_none());
        assert!(s.tip(Roll::Ccw, &grid).is_none());
    }

    #[test]
    fn score_matches_the_cell_after_every_tip() {
        let grid = Grid::puzzle();
        let mut frontier = vec![start()];
        for _ in 0..6 {
            let mut next = Vec::new();
            for s in &frontier {
                for roll in Roll::tips() {
                    if let Some(n) = s.tip(roll, &grid) {
                        assert_eq!(Some(&n.score()), grid.at(n.location()));
                        assert_eq!(n.move_count(), s.move_count() + 1);
                        next.push(Rc::new(n));
                    }
                }
            }
            frontier = next;
        }
    }

    #[test]
    fn reverse_path_walks_predecessors() {
        let grid = Grid::puzzle();
        let a = start();
        let b = Rc::new(a.tip(Roll::Up, &grid).unwrap());
        let c = b.tip(Roll::Right, &grid).unwrap();
        assert_eq!(
            c.reverse_path(),
            vec![Location::new(4, 1), Location::new(4, 0), START]
        );
    }
}
