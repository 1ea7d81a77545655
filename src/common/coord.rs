//! Coordinate representation and conversion.
//!
//! Coordinates are a (file, rank) pair, where file is the column and rank is
//! the row. (0, 0) is a1, the bottom left corner seen from white, and (7, 7)
//! is h8.
//!
//! Coordinates are converted to and from strings using the `Display` and
//! `FromStr` traits (or the `from_string` method). The string representation
//! is the file letter followed by the rank number, e.g. "a1", "b2", "c3".
use std::fmt::Display;

use super::errors::BoardError;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Coord {
    pub file: u8,
    pub rank: u8,
}

impl Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let file = (b'a' + self.file) as char;
        let rank = self.rank + 1;
        write!(f, "{}{}", file, rank)
    }
}

impl std::str::FromStr for Coord {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coord::from_string(s)
    }
}

impl Coord {
    pub fn from_string(s: &str) -> Result<Coord, BoardError> {
        let &[file, rank] = s.as_bytes() else {
            return Err(BoardError::MalformedCoordinateString(s.to_string()));
        };
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(BoardError::CoordinateOutOfRange(s.to_string()));
        }
        Ok(Coord {
            file: file - b'a',
            rank: rank - b'1',
        })
    }

    pub fn new(file: u8, rank: u8) -> Coord {
        debug_assert!(file < 8 && rank < 8, "Invalid coordinate: {file}{rank}");
        Coord { file, rank }
    }

    /// Light squares are the ones where file and rank have different parity,
    /// so a1 is dark and h1 is light.
    pub fn is_light(&self) -> bool {
        (self.file + self.rank) % 2 == 1
    }
}
