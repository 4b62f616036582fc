//! The whole cube: six packed faces and the turns applied to them.

use log::{debug, trace};
use thiserror::Error;

use crate::{
    face_state::{FaceState, LANE_COUNT},
    geometry::{Color, Face},
    notation::{NotationError, Turn, format_sequence, parse_sequence},
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Lane {lane} is out of range, expected a value between 1 and 8")]
pub struct LaneOutOfRange {
    pub lane: u8,
}

/// Facelet positions of a face in row-major order, indexed by lane. Index 4
/// is the center.
const RING_TO_GRID: [usize; LANE_COUNT as usize] = [0, 1, 2, 5, 8, 7, 6, 3];

/// Face order of a facelet string.
const FACELET_STRING_ORDER: [Face; 6] = [
    Face::Up,
    Face::Right,
    Face::Front,
    Face::Down,
    Face::Left,
    Face::Back,
];

/// The state of a cube. Every color always occupies exactly eight lanes
/// across the six faces: turns only ever permute facelets.
#[derive(Debug, Clone)]
pub struct CubeState {
    faces: [FaceState; 6],
    history: Vec<Turn>,
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeState {
    /// A solved cube with an empty history.
    pub fn new() -> CubeState {
        CubeState {
            faces: Face::ALL.map(|face| FaceState::solid(face.canonical_color())),
            history: vec![],
        }
    }

    /// A solved cube with `turns` applied.
    pub fn replay<'a>(turns: impl IntoIterator<Item = &'a Turn>) -> CubeState {
        let mut cube = CubeState::new();
        cube.apply_sequence(turns.into_iter().copied());
        cube
    }

    /// Turn `face` a quarter turn and record it in the history.
    pub fn turn(&mut self, face: Face, counterclockwise: bool) {
        self.apply_turn(Turn::new(face, counterclockwise));
    }

    pub fn apply_turn(&mut self, turn: Turn) {
        trace!(target: "turn", "Applying {turn}");
        self.history.push(turn);

        let Turn {
            face,
            counterclockwise,
        } = turn;

        self.faces[face as usize] = self.faces[face as usize].rotated(counterclockwise);

        let neighbors = *face.neighbors();
        let strips =
            neighbors.map(|neighbor| self.faces[neighbor.face as usize].strip(neighbor.lanes));

        // Clockwise, facelets travel from the up side to the right side and
        // on around, so each side receives the strip of the side before it.
        for (i, neighbor) in neighbors.iter().enumerate() {
            let from = if counterclockwise { (i + 1) % 4 } else { (i + 3) % 4 };
            let state = &mut self.faces[neighbor.face as usize];
            *state = state.with_strip(neighbor.lanes, strips[from]);
        }
    }

    /// Apply each turn in order. A shuffle is this with a caller chosen
    /// sequence.
    pub fn apply_sequence(&mut self, turns: impl IntoIterator<Item = Turn>) {
        let before = self.history.len();
        for turn in turns {
            self.apply_turn(turn);
        }
        debug!(
            target: "sequence",
            "Applied {} turns: {}",
            self.history.len() - before,
            format_sequence(&self.history[before..])
        );
    }

    /// Parse and apply a move sequence such as `R U R' U'`.
    ///
    /// # Errors
    ///
    /// If any token is invalid, in which case no turn is applied.
    pub fn apply_notation(&mut self, sequence: &str) -> Result<(), NotationError> {
        let turns = parse_sequence(sequence)?;
        self.apply_sequence(turns);
        Ok(())
    }

    /// The color at lane `lane` of `face`.
    ///
    /// # Errors
    ///
    /// If `lane` is not between 1 and 8.
    pub fn color_at(&self, face: Face, lane: u8) -> Result<Color, LaneOutOfRange> {
        if !(1..=LANE_COUNT).contains(&lane) {
            return Err(LaneOutOfRange { lane });
        }
        Ok(self.face_state(face).lane(lane))
    }

    pub fn is_solved(&self) -> bool {
        Face::ALL
            .iter()
            .all(|&face| self.face_state(face).is_solid(face.canonical_color()))
    }

    /// Every turn applied so far, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn face_state(&self, face: Face) -> FaceState {
        self.faces[face as usize]
    }

    /// All face states, indexed by `Face as usize`.
    pub fn face_states(&self) -> [FaceState; 6] {
        self.faces
    }

    /// How many lanes hold each color, indexed by `Color as usize`.
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for state in self.faces {
            for color in state.lanes() {
                counts[color as usize] += 1;
            }
        }
        counts
    }

    /// The 54 facelets as face letters, faces in URFDLB order and each face
    /// row by row as seen from outside, centers included. A facelet is
    /// written as the letter of the face its color belongs to, so a solved
    /// cube reads `UUUUUUUUURRRRRRRRRFFFFFFFFF...`.
    pub fn facelet_string(&self) -> String {
        let mut out = String::with_capacity(54);
        for face in FACELET_STRING_ORDER {
            let mut grid = [face.letter(); 9];
            for (&cell, color) in RING_TO_GRID.iter().zip(self.face_state(face).lanes()) {
                grid[cell] = color.home_face().letter();
            }
            out.extend(grid);
        }
        out
    }
}
