use std::collections::HashMap;
use std::sync::LazyLock;

use crate::orientation::{Facing, Orientation};

/// Face number, 0 to 5.
pub type Face = usize;

pub const NUMBER_OF_FACES: usize = 6;

static TOP_FACE: LazyLock<HashMap<Orientation, Face>> = LazyLock::new(|| {
    Orientation::all()
        .iter()
        .map(|o| (*o, face_pointing(o, Facing::Sky)))
        .collect()
});

pub fn facing_of(orientation: &Orientation, face: Face) -> Facing {
    orientation.facing_map()[face]
}

/// The face pointing in `facing`. Every orientation covers all six
/// directions exactly once.
pub fn face_pointing(orientation: &Orientation, facing: Facing) -> Face {
    orientation
        .facing_map()
        .iter()
        .position(|f| *f == facing)
        // Realizable orientations only come out of the tables, and each of
        // their facing maps is a permutation of all six directions.
        .unwrap_or_else(|| panic!("{:?} has no face pointing {:?}", orientation, facing))
}

pub fn top_face(orientation: &Orientation) -> Face {
    TOP_FACE[orientation]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::Roll;

    #[test]
    fn canonical_top_is_face_5() {
        let o = Orientation::canonical();
        assert_eq!(top_face(&o), 5);
        for face in 0..NUMBER_OF_FACES {
            assert_eq!(facing_of(&o, face), Facing::from_index(face));
        }
    }

    #[test]
    fn facing_map_is_consistent_with_pair() {
        for o in Orientation::all() {
            assert_eq!(facing_of(o, 0), o.face0());
            assert_eq!(facing_of(o, 1), o.face1());
            for facing in Facing::all() {
                assert_eq!(facing_of(o, face_pointing(o, facing)), facing);
            }
        }
    }

    #[test]
    fn opposite_faces_stay_opposite() {
        for o in Orientation::all() {
            let bottom = face_pointing(o, Facing::Floor);
            let top = Facing::from_index(bottom).opposite().index();
            assert_eq!(top_face(o), top);
        }
    }

    #[test]
    fn each_face_reaches_the_top() {
        let mut seen = [false; NUMBER_OF_FACES];
        for o in Orientation::all() {
            seen[top_face(o)] = true;
        }
        assert!(seen.iter().all(|x| *x));
    }

    #[test]
    fn first_tips_from_canonical() {
        let o = Orientation::canonical();
        // Tipping north brings the south face up.
        assert_eq!(top_face(&o.tip(Roll::Up)), 3);
        assert_eq!(top_face(&o.tip(Roll::Right)), 4);
        assert_eq!(top_face(&o.tip(Roll::Down)), 1);
        assert_eq!(top_face(&o.tip(Roll::Left)), 2);
    }
}
