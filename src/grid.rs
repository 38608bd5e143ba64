use std::sync::LazyLock;

use regex::Regex;

use crate::error::SolveError;
use crate::orientation::Roll;

pub const BOARD_SIZE: i32 = 6;

pub const START: Location = Location { row: 5, col: 0 };
pub const GOAL: Location = Location { row: 0, col: 5 };

const PUZZLE: [[i64; 6]; 6] = [
    [57, 33, 132, 268, 492, 732],
    [81, 123, 240, 443, 353, 508],
    [186, 42, 195, 704, 452, 228],
    [-7, 2, 357, 452, 317, 395],
    [5, 23, -4, 592, 445, 620],
    [0, 77, 32, 403, 337, 452],
];

static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\s,\[\]]+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub row: i32,
    pub col: i32,
}

impl Location {
    pub fn new(row: i32, col: i32) -> Location {
        Location { row, col }
    }

    pub fn step(&self, roll: Roll) -> Location {
        let (drow, dcol) = roll.delta();
        Location {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map<T> {
    number_of_rows: i32,
    number_of_columns: i32,
    row_data: Vec<Vec<T>>,
}

pub type Grid = Map<i64>;

impl<T> Map<T>
where
    T: Clone,
{
    pub fn from_rows(row_data: Vec<Vec<T>>) -> Result<Map<T>, SolveError> {
        let number_of_rows = row_data.len();
        let number_of_columns = match row_data.first() {
            Some(row) => row.len(),
            None => return Err(SolveError::MalformedGrid("no rows".to_string())),
        };

        if let Some((i, row)) = row_data
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != number_of_columns)
        {
            return Err(SolveError::MalformedGrid(format!(
                "row {} has {} columns, expected {}",
                i,
                row.len(),
                number_of_columns
            )));
        }

        Ok(Map {
            number_of_rows: to_i32(number_of_rows)?,
            number_of_columns: to_i32(number_of_columns)?,
            row_data,
        })
    }

    pub fn number_of_rows(&self) -> i32 {
        self.number_of_rows
    }

    pub fn number_of_columns(&self) -> i32 {
        self.number_of_columns
    }

    pub fn at(&self, loc: Location) -> Option<&T> {
        if !self.in_bounds(loc) {
            return None;
        }
        Some(&self.row_data[loc.row as usize][loc.col as usize])
    }

    pub fn in_bounds(&self, Location { row, col }: Location) -> bool {
        !(row < 0 || row >= self.number_of_rows || col < 0 || col >= self.number_of_columns)
    }

    pub fn indexed_for_each<F>(&self, mut f: F)
    where
        F: FnMut(Location, &T),
    {
        for (row, values) in self.row_data.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                f(Location::new(row as i32, col as i32), value);
            }
        }
    }

    pub fn values(&self) -> Vec<T> {
        self.row_data.iter().flatten().cloned().collect()
    }

    pub fn show<F>(&self, format_cell: F) -> String
    where
        F: Fn(Location, &T) -> String,
    {
        let mut rv: Vec<String> = Vec::new();

        self.indexed_for_each(|loc, value| {
            rv.push(format_cell(loc, value));
            if loc.col == self.number_of_columns - 1 {
                rv.push("\n".to_string());
            }
        });

        rv.join("")
    }
}

fn to_i32(n: usize) -> Result<i32, SolveError> {
    n.try_into()
        .map_err(|_| SolveError::MalformedGrid(format!("dimension {} is too large", n)))
}

impl Grid {
    /// The published board.
    pub fn puzzle() -> Grid {
        Map {
            number_of_rows: BOARD_SIZE,
            number_of_columns: BOARD_SIZE,
            row_data: PUZZLE.iter().map(|row| row.to_vec()).collect(),
        }
    }

    /// Parses one board row per non-empty line. Numbers may be separated by
    /// whitespace or commas; brackets are ignored.
    pub fn from_string(s: &str) -> Result<Grid, SolveError> {
        let mut rows: Vec<Vec<i64>> = Vec::new();

        for (line_number, line) in s.lines().enumerate() {
            let row = TOKEN
                .find_iter(line)
                .map(|token| {
                    token.as_str().parse::<i64>().map_err(|_| {
                        SolveError::MalformedGrid(format!(
                            "line {}: {:?} is not an integer",
                            line_number + 1,
                            token.as_str()
                        ))
                    })
                })
                .collect::<Result<Vec<i64>, SolveError>>()?;
            if !row.is_empty() {
                rows.push(row);
            }
        }

        let grid = Grid::from_rows(rows)?;
        grid.validate()?;
        Ok(grid)
    }

    /// Checks the board is the fixed 6x6 shape the search runs on.
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.number_of_rows != BOARD_SIZE || self.number_of_columns != BOARD_SIZE {
            return Err(SolveError::MalformedGrid(format!(
                "board is {}x{}, expected {}x{}",
                self.number_of_rows, self.number_of_columns, BOARD_SIZE, BOARD_SIZE
            )));
        }
        Ok(())
    }

    pub fn total(&self) -> i64 {
        self.values().iter().sum()
    }
}
