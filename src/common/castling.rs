//! Castling availability, stored as a four bit flag set.
//!
//!  BQ | BK | WQ | WK
//!  08   04   02   01
use std::fmt::{Display, Formatter};

use tracing::debug;

use super::errors::FenError;
use super::piece::Player;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CastlingRight {
    WhiteKingside,
    WhiteQueenside,
    BlackKingside,
    BlackQueenside,
}

impl CastlingRight {
    pub const ALL: [CastlingRight; 4] = [
        CastlingRight::WhiteKingside,
        CastlingRight::WhiteQueenside,
        CastlingRight::BlackKingside,
        CastlingRight::BlackQueenside,
    ];

    pub fn kingside(player: Player) -> CastlingRight {
        match player {
            Player::White => CastlingRight::WhiteKingside,
            Player::Black => CastlingRight::BlackKingside,
        }
    }

    pub fn queenside(player: Player) -> CastlingRight {
        match player {
            Player::White => CastlingRight::WhiteQueenside,
            Player::Black => CastlingRight::BlackQueenside,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            CastlingRight::WhiteKingside => 0x01,
            CastlingRight::WhiteQueenside => 0x02,
            CastlingRight::BlackKingside => 0x04,
            CastlingRight::BlackQueenside => 0x08,
        }
    }

    pub fn as_fen_char(self) -> char {
        match self {
            CastlingRight::WhiteKingside => 'K',
            CastlingRight::WhiteQueenside => 'Q',
            CastlingRight::BlackKingside => 'k',
            CastlingRight::BlackQueenside => 'q',
        }
    }

    fn from_fen_char(c: char) -> Option<CastlingRight> {
        match c {
            'K' => Some(CastlingRight::WhiteKingside),
            'Q' => Some(CastlingRight::WhiteQueenside),
            'k' => Some(CastlingRight::BlackKingside),
            'q' => Some(CastlingRight::BlackQueenside),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(0x0f);

    /// Parse the castling availability field.
    ///
    /// A `-` ends the field wherever it appears, keeping any rights read
    /// before it, so `"K-q"` only grants white kingside castling.
    pub fn from_fen(field: &str) -> Result<CastlingRights, FenError> {
        let mut rights = CastlingRights::NONE;
        for c in field.chars() {
            if c == '-' {
                break;
            }
            let right =
                CastlingRight::from_fen_char(c).ok_or(FenError::InvalidCastlingCharacter(c))?;
            rights.insert(right);
        }
        debug!(field, %rights, "parsed castling availability");
        Ok(rights)
    }

    pub fn insert(&mut self, right: CastlingRight) {
        self.0 |= right.bit();
    }

    pub fn contains(&self, right: CastlingRight) -> bool {
        self.0 & right.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = CastlingRight> + '_ {
        CastlingRight::ALL
            .into_iter()
            .filter(move |right| self.contains(*right))
    }
}

impl FromIterator<CastlingRight> for CastlingRights {
    fn from_iter<T: IntoIterator<Item = CastlingRight>>(iter: T) -> Self {
        let mut rights = CastlingRights::NONE;
        iter.into_iter().for_each(|right| rights.insert(right));
        rights
    }
}

impl Display for CastlingRights {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        self.iter()
            .try_for_each(|right| write!(f, "{}", right.as_fen_char()))
    }
}
