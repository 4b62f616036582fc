//! A 3x3x3 cube stored as six 64-bit words, one per face, with eight 8-bit
//! lanes per word for the facelets around each center.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cube_state;
pub mod face_state;
pub mod geometry;
pub mod notation;

pub use cube_state::{CubeState, LaneOutOfRange};
pub use face_state::FaceState;
pub use geometry::{ADJACENCY, Color, Face, InvalidColor, Neighbor, Side};
pub use notation::{NotationError, Turn, format_sequence, parse_sequence};
