//! Fixed geometry of the 3x3x3 cube: colors, faces, and which lanes of which
//! neighbors border each face.

use std::fmt;

use thiserror::Error;

/// A facelet color. The discriminant is the value stored in a lane.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Color {
    Yellow = 0,
    Green = 1,
    Orange = 2,
    Blue = 3,
    Red = 4,
    White = 5,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{0} is not a color, expected a value between 0 and 5")]
pub struct InvalidColor(pub u8);

impl Color {
    pub const ALL: [Self; 6] = {
        use Color::*;
        let v = [Yellow, Green, Orange, Blue, Red, White];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The face that shows this color when the cube is solved.
    pub const fn home_face(self) -> Face {
        match self {
            Color::Yellow => Face::Up,
            Color::Green => Face::Front,
            Color::Orange => Face::Right,
            Color::Blue => Face::Back,
            Color::Red => Face::Left,
            Color::White => Face::Down,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Orange => 'O',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::White => 'W',
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = InvalidColor;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Color::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(InvalidColor(value))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Orange => "orange",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::White => "white",
        };
        f.write_str(name)
    }
}

/// One of the six faces. A face keeps its identity forever; only the colors
/// of its facelets move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Up,
    Down,
    Front,
    Right,
    Left,
    Back,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [Up, Down, Front, Right, Left, Back];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The color this face shows when the cube is solved.
    pub const fn canonical_color(self) -> Color {
        match self {
            Face::Up => Color::Yellow,
            Face::Down => Color::White,
            Face::Front => Color::Green,
            Face::Right => Color::Orange,
            Face::Left => Color::Red,
            Face::Back => Color::Blue,
        }
    }

    pub const fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
        }
    }

    /// The upper case notation letter for this face.
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Right => 'R',
            Face::Left => 'L',
            Face::Back => 'B',
        }
    }

    /// Look up a face by its notation letter, ignoring case.
    pub fn from_letter(letter: char) -> Option<Face> {
        match letter.to_ascii_uppercase() {
            'U' => Some(Face::Up),
            'D' => Some(Face::Down),
            'F' => Some(Face::Front),
            'R' => Some(Face::Right),
            'L' => Some(Face::Left),
            'B' => Some(Face::Back),
            _ => None,
        }
    }

    /// The four faces encircling this one with the lanes they share with it,
    /// in `Side` order.
    pub fn neighbors(self) -> &'static [Neighbor; 4] {
        &ADJACENCY[self as usize]
    }

    pub fn neighbor(self, side: Side) -> Neighbor {
        ADJACENCY[self as usize][side as usize]
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Face::Up => "up",
            Face::Down => "down",
            Face::Front => "front",
            Face::Right => "right",
            Face::Left => "left",
            Face::Back => "back",
        };
        f.write_str(name)
    }
}

/// Position of a neighbor relative to a face, clockwise from the top. `Back`
/// is the side across from `Up` in the face's own frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    Up,
    Right,
    Back,
    Left,
}

impl Side {
    pub const ALL: [Self; 4] = [Side::Up, Side::Right, Side::Back, Side::Left];
}

/// A face bordering a turned face, and the three lanes of it that move with
/// the turn, listed in the turned face's clockwise order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Neighbor {
    pub face: Face,
    pub lanes: [u8; 3],
}

const fn nb(face: Face, lanes: [u8; 3]) -> Neighbor {
    Neighbor { face, lanes }
}

const TOP: [u8; 3] = [3, 2, 1];
const RIGHT: [u8; 3] = [5, 4, 3];
const BOTTOM: [u8; 3] = [7, 6, 5];
const LEFT: [u8; 3] = [1, 8, 7];

/// Indexed by `Face as usize`, then by `Side as usize`.
pub static ADJACENCY: [[Neighbor; 4]; 6] = {
    use Face::*;
    let table = [
        // Up
        [nb(Back, TOP), nb(Right, TOP), nb(Front, TOP), nb(Left, TOP)],
        // Down
        [
            nb(Front, BOTTOM),
            nb(Right, BOTTOM),
            nb(Back, BOTTOM),
            nb(Left, BOTTOM),
        ],
        // Front
        [nb(Up, BOTTOM), nb(Right, LEFT), nb(Down, TOP), nb(Left, RIGHT)],
        // Right
        [nb(Up, RIGHT), nb(Back, LEFT), nb(Down, RIGHT), nb(Front, RIGHT)],
        // Left
        [nb(Up, LEFT), nb(Front, LEFT), nb(Down, LEFT), nb(Back, RIGHT)],
        // Back
        [nb(Up, TOP), nb(Left, LEFT), nb(Down, BOTTOM), nb(Right, RIGHT)],
    ];

    // A face never borders itself or its opposite, and every strip is a
    // corner, the edge next to it, then the other corner.
    let mut f = 0;
    while f < table.len() {
        let mut s = 0;
        while s < 4 {
            let n = table[f][s];
            assert!(n.face as usize != f);
            assert!(n.face.opposite() as usize != f);
            assert!(n.lanes[0] % 2 == 1 && n.lanes[1] % 2 == 0 && n.lanes[2] % 2 == 1);
            s += 1;
        }
        f += 1;
    }

    table
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_round_trips_through_byte() {
        for color in Color::ALL {
            assert_eq!(Color::try_from(color as u8), Ok(color));
        }
        assert_eq!(Color::try_from(6), Err(InvalidColor(6)));
        assert_eq!(Color::try_from(0xFF), Err(InvalidColor(0xFF)));
    }

    #[test]
    fn canonical_colors_are_a_bijection() {
        for face in Face::ALL {
            assert_eq!(face.canonical_color().home_face(), face);
        }
    }

    #[test]
    fn face_letters_are_case_insensitive() {
        for face in Face::ALL {
            assert_eq!(Face::from_letter(face.letter()), Some(face));
            assert_eq!(
                Face::from_letter(face.letter().to_ascii_lowercase()),
                Some(face)
            );
        }
        assert_eq!(Face::from_letter('Q'), None);
    }

    #[test]
    fn neighbors_are_symmetric() {
        for face in Face::ALL {
            let mut seen = face
                .neighbors()
                .iter()
                .map(|n| n.face)
                .collect::<Vec<_>>();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), 4, "{face} has a repeated neighbor");

            for neighbor in face.neighbors() {
                assert!(
                    neighbor.face.neighbors().iter().any(|n| n.face == face),
                    "{face} lists {} but not the other way around",
                    neighbor.face
                );
            }
        }
    }

    #[test]
    fn front_is_framed_by_up_right_down_left() {
        let framed = Side::ALL.map(|side| Face::Front.neighbor(side).face);
        assert_eq!(framed, [Face::Up, Face::Right, Face::Down, Face::Left]);
        assert_eq!(Face::Front.neighbor(Side::Up).lanes, [7, 6, 5]);
    }

    #[test]
    fn every_lane_borders_the_right_number_of_turns() {
        // Each edge lane belongs to one strip and each corner lane to two.
        let mut uses = [[0; 8]; 6];
        for face in Face::ALL {
            for neighbor in face.neighbors() {
                for lane in neighbor.lanes {
                    uses[neighbor.face as usize][usize::from(lane) - 1] += 1;
                }
            }
        }
        for face_uses in uses {
            assert_eq!(face_uses, [2, 1, 2, 1, 2, 1, 2, 1]);
        }
    }
}
