//! Orientations of the die and the rolls that move between them.
//!
//! Looking down at the board, the six spatial directions are numbered
//!
//! ```text
//!        1
//!      +---+
//!    4 | 5 | 2
//!      +---+
//!        3
//! ```
//!
//! with 0 pointing into the table. Face `i` of the die initially points in
//! direction `i`, so face 5 starts on top and face 0 on the bottom.

use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facing {
    Floor,
    North,
    East,
    South,
    West,
    Sky,
}

/// A motion of the whole die. The first four are tips across an edge onto a
/// neighbouring cell; the spins never happen on the board but are needed to
/// enumerate orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Roll {
    Up,
    Right,
    Down,
    Left,
    Cw,
    Ccw,
}

/// Facing of face 0 and face 1. Two non-opposite faces pin down the whole
/// rigid rotation, so 24 of the 36 pairs are realizable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Orientation {
    face0: Facing,
    face1: Facing,
}

/// Where each face points, indexed by face number.
pub type FacingMap = [Facing; 6];

// ROLL_OPERATORS[roll][old facing] = new facing.
const ROLL_OPERATORS: [[usize; 6]; 6] = [
    [3, 0, 2, 5, 4, 1], // up
    [4, 1, 0, 3, 5, 2], // right
    [1, 5, 2, 0, 4, 3], // down
    [2, 1, 5, 3, 0, 4], // left
    [0, 2, 3, 4, 1, 5], // cw
    [0, 4, 1, 2, 3, 5], // ccw
];

impl Facing {
    pub fn all() -> [Facing; 6] {
        [
            Facing::Floor,
            Facing::North,
            Facing::East,
            Facing::South,
            Facing::West,
            Facing::Sky,
        ]
    }

    pub fn from_index(n: usize) -> Facing {
        Facing::all()[n]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn opposite(&self) -> Facing {
        match self {
            Facing::Floor => Facing::Sky,
            Facing::North => Facing::South,
            Facing::East => Facing::West,
            Facing::South => Facing::North,
            Facing::West => Facing::East,
            Facing::Sky => Facing::Floor,
        }
    }
}

impl Roll {
    /// The four tips, in the board's natural exploration order.
    pub fn tips() -> [Roll; 4] {
        [Roll::Up, Roll::Right, Roll::Down, Roll::Left]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Whether this roll moves the die onto a neighbouring cell.
    pub fn is_tip(&self) -> bool {
        !matches!(self, Roll::Cw | Roll::Ccw)
    }

    pub fn inverse(&self) -> Roll {
        match self {
            Roll::Up => Roll::Down,
            Roll::Right => Roll::Left,
            Roll::Down => Roll::Up,
            Roll::Left => Roll::Right,
            Roll::Cw => Roll::Ccw,
            Roll::Ccw => Roll::Cw,
        }
    }

    /// `(drow, dcol)` of a tip; zero for the spins.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Roll::Up => (-1, 0),
            Roll::Right => (0, 1),
            Roll::Down => (1, 0),
            Roll::Left => (0, -1),
            Roll::Cw | Roll::Ccw => (0, 0),
        }
    }

    pub fn apply(&self, facing: Facing) -> Facing {
        Facing::from_index(ROLL_OPERATORS[self.index()][facing.index()])
    }

    /// Applies the roll `times` times to every entry of a facing map.
    pub fn apply_n<const N: usize>(&self, facings: [Facing; N], times: usize) -> [Facing; N] {
        let mut rv = facings;
        for _ in 0..times {
            rv = rv.map(|f| self.apply(f));
        }
        rv
    }

    /// The spin that leaves `axis` pointing where it is.
    fn spin_about(axis: Facing) -> Roll {
        match axis {
            Facing::Floor => Roll::Cw,
            Facing::North => Roll::Right,
            Facing::East => Roll::Down,
            Facing::South => Roll::Left,
            Facing::West => Roll::Up,
            Facing::Sky => Roll::Ccw,
        }
    }

    /// Rolls that take face 0 from the floor to `target`.
    fn bring_floor_to(target: Facing) -> &'static [Roll] {
        match target {
            Facing::Floor => &[],
            Facing::North => &[Roll::Down],
            Facing::East => &[Roll::Left],
            Facing::South => &[Roll::Up],
            Facing::West => &[Roll::Right],
            Facing::Sky => &[Roll::Right, Roll::Right],
        }
    }
}

impl Orientation {
    /// Face 0 on the floor, face 1 to the north, face 5 on top.
    pub fn canonical() -> Orientation {
        Orientation {
            face0: Facing::Floor,
            face1: Facing::North,
        }
    }

    /// All 24 realizable orientations.
    pub fn all() -> &'static [Orientation] {
        &TABLES.orientations
    }

    pub fn face0(&self) -> Facing {
        self.face0
    }

    pub fn face1(&self) -> Facing {
        self.face1
    }

    pub fn is_realizable(&self) -> bool {
        TABLES.index_of.contains_key(self)
    }

    fn of(facings: &FacingMap) -> Orientation {
        Orientation {
            face0: facings[0],
            face1: facings[1],
        }
    }

    fn index(&self) -> usize {
        TABLES.index_of[self]
    }

    /// The orientation after one tip. Total over realizable orientations.
    pub fn tip(&self, roll: Roll) -> Orientation {
        TABLES.tip[roll.index()][self.index()]
    }

    pub(crate) fn facing_map(&self) -> &'static FacingMap {
        &TABLES.facing_maps[self.index()]
    }
}

struct Tables {
    orientations: Vec<Orientation>,
    index_of: HashMap<Orientation, usize>,
    facing_maps: Vec<FacingMap>,
    tip: [Vec<Orientation>; 6],
}

static TABLES: LazyLock<Tables> = LazyLock::new(Tables::build);

impl Tables {
    fn build() -> Tables {
        let identity: FacingMap = Facing::all();

        // Put face 0 in each of the six directions, then spin four times about
        // that axis.
        let mut facing_maps: Vec<FacingMap> = Vec::with_capacity(24);
        for axis in Facing::all() {
            let base = Roll::bring_floor_to(axis)
                .iter()
                .fold(identity, |m, roll| roll.apply_n(m, 1));
            let spin = Roll::spin_about(axis);
            for times in 0..4 {
                facing_maps.push(spin.apply_n(base, times));
            }
        }

        let orientations: Vec<Orientation> = facing_maps.iter().map(Orientation::of).collect();
        let index_of: HashMap<Orientation, usize> = orientations
            .iter()
            .enumerate()
            .map(|(i, o)| (*o, i))
            .collect();
        assert_eq!(index_of.len(), 24);

        let tip: [Vec<Orientation>; 6] = [
            Roll::Up,
            Roll::Right,
            Roll::Down,
            Roll::Left,
            Roll::Cw,
            Roll::Ccw,
        ]
        .map(|roll| {
            orientations
                .iter()
                .map(|o| {
                    let [face0, face1] = roll.apply_n([o.face0, o.face1], 1);
                    Orientation { face0, face1 }
                })
                .collect()
        });

        Tables {
            orientations,
            index_of,
            facing_maps,
            tip,
        }
    }
}
