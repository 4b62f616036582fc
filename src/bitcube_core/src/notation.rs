use std::{fmt, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

use crate::geometry::Face;

/// Marks a counterclockwise turn when it follows a face letter.
pub const INVERSE_MARKER: char = '\'';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Invalid turn {0:?}, expected one of U D F R L B optionally followed by '")]
    InvalidToken(String),
}

/// A quarter turn of one face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Turn {
    pub face: Face,
    pub counterclockwise: bool,
}

impl Turn {
    pub const fn new(face: Face, counterclockwise: bool) -> Turn {
        Turn {
            face,
            counterclockwise,
        }
    }

    pub const fn clockwise(face: Face) -> Turn {
        Turn::new(face, false)
    }

    pub const fn counterclockwise(face: Face) -> Turn {
        Turn::new(face, true)
    }

    /// The turn that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Turn {
        Turn::new(self.face, !self.counterclockwise)
    }

    /// Parse a single token such as `R`, `r` or `U'`.
    ///
    /// # Errors
    ///
    /// If the token is anything other than one face letter optionally
    /// followed by one inverse marker.
    pub fn parse(token: &str) -> Result<Turn, NotationError> {
        let (letter, counterclockwise) = match token.strip_suffix(INVERSE_MARKER) {
            Some(rest) => (rest, true),
            None => (token, false),
        };

        let mut chars = letter.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return Err(NotationError::InvalidToken(token.to_owned()));
        };

        Face::from_letter(letter)
            .map(|face| Turn::new(face, counterclockwise))
            .ok_or_else(|| NotationError::InvalidToken(token.to_owned()))
    }
}

impl FromStr for Turn {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Turn::parse(s)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face.letter())?;
        if self.counterclockwise {
            write!(f, "{INVERSE_MARKER}")?;
        }
        Ok(())
    }
}

/// Parse a whitespace separated move sequence such as `R U R' U'`.
///
/// # Errors
///
/// On the first token that is not a valid turn.
pub fn parse_sequence(sequence: &str) -> Result<Vec<Turn>, NotationError> {
    sequence.split_ascii_whitespace().map(Turn::parse).collect()
}

pub fn format_sequence(turns: &[Turn]) -> String {
    turns.iter().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_face_both_ways() {
        for face in Face::ALL {
            let upper = face.letter().to_string();
            let lower = upper.to_ascii_lowercase();
            assert_eq!(Turn::parse(&upper), Ok(Turn::clockwise(face)));
            assert_eq!(Turn::parse(&lower), Ok(Turn::clockwise(face)));
            assert_eq!(
                Turn::parse(&format!("{upper}'")),
                Ok(Turn::counterclockwise(face))
            );
            assert_eq!(
                format!("{lower}'").parse::<Turn>(),
                Ok(Turn::counterclockwise(face))
            );
        }
    }

    #[test]
    fn front_inverse_lower_case() {
        assert_eq!(Turn::parse("f'"), Ok(Turn::new(Face::Front, true)));
    }

    #[test]
    fn rejects_malformed_tokens() {
        for token in ["Q", "", "'", "F''", "FF", "F2", " F", "F ", "'F", "Fx", "Ü"] {
            assert_eq!(
                Turn::parse(token),
                Err(NotationError::InvalidToken(token.to_owned())),
                "{token:?}"
            );
        }
    }

    #[test]
    fn display_round_trips() {
        for face in Face::ALL {
            for turn in [Turn::clockwise(face), Turn::counterclockwise(face)] {
                assert_eq!(turn.to_string().parse::<Turn>(), Ok(turn));
            }
        }
        assert_eq!(Turn::counterclockwise(Face::Right).to_string(), "R'");
    }

    #[test]
    fn inverse_flips_direction_only() {
        let turn = Turn::clockwise(Face::Back);
        assert_eq!(turn.inverse(), Turn::counterclockwise(Face::Back));
        assert_eq!(turn.inverse().inverse(), turn);
    }

    #[test]
    fn sequences() {
        let turns = parse_sequence("  r U  r' u'\n").unwrap();
        assert_eq!(
            turns,
            vec![
                Turn::clockwise(Face::Right),
                Turn::clockwise(Face::Up),
                Turn::counterclockwise(Face::Right),
                Turn::counterclockwise(Face::Up),
            ]
        );
        assert_eq!(format_sequence(&turns), "R U R' U'");
        assert_eq!(parse_sequence(""), Ok(vec![]));
        assert_eq!(
            parse_sequence("R U2 F"),
            Err(NotationError::InvalidToken("U2".to_owned()))
        );
    }
}
