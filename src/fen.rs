//! A complete FEN record.
//!
//! The placement, active color and castling fields are decoded. The en
//! passant target and the two move counters are carried through as given.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use tracing::debug;

use crate::common::{parse_active_color, Board, CastlingRights, FenError, Player};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    pub board: Board,
    pub active_color: Player,
    pub castling: CastlingRights,
    pub en_passant: String,
    pub halfmove_clock: String,
    pub fullmove_number: String,
}

impl Fen {
    /// Build a record from its six fields, checked in the order they appear.
    pub fn from_fields(
        placement: &str,
        active_color: &str,
        castling: &str,
        en_passant: &str,
        halfmove_clock: &str,
        fullmove_number: &str,
    ) -> Result<Fen, FenError> {
        let board = Board::from_fen_position(placement)?;
        let active_color = parse_active_color(active_color)?;
        let castling = CastlingRights::from_fen(castling)?;
        debug!(%active_color, %castling, en_passant, "parsed FEN record");

        Ok(Fen {
            board,
            active_color,
            castling,
            en_passant: en_passant.to_string(),
            halfmove_clock: halfmove_clock.to_string(),
            fullmove_number: fullmove_number.to_string(),
        })
    }

    /// The en passant target, unless the field starts with `-`.
    pub fn en_passant_square(&self) -> Option<&str> {
        if self.en_passant.starts_with('-') {
            None
        } else {
            Some(&self.en_passant)
        }
    }
}

impl FromStr for Fen {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let &[placement, active_color, castling, en_passant, halfmove, fullmove] =
            fields.as_slice()
        else {
            return Err(FenError::WrongFieldCount(fields.len()));
        };
        Fen::from_fields(
            placement,
            active_color,
            castling,
            en_passant,
            halfmove,
            fullmove,
        )
    }
}

impl Display for Fen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.board.to_fen_position(),
            self.active_color.as_fen_char(),
            self.castling,
            self.en_passant,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{CastlingRight, Coord, Piece, PieceType};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_from_fields() {
        let fen = Fen::from_fields("4k3/8/8/8/4P3/8/8/4K3", "b", "-", "e3", "0", "1").unwrap();
        assert_eq!(fen.active_color, Player::Black);
        assert_eq!(fen.castling, CastlingRights::NONE);
        assert_eq!(fen.en_passant_square(), Some("e3"));
        assert_eq!(
            fen.board.get(Coord::from_string("e4").unwrap()),
            Some(Piece::new(PieceType::Pawn, Player::White))
        );
    }

    #[test]
    fn test_start_position_round_trips() {
        let fen: Fen = START.parse().unwrap();
        assert_eq!(fen.active_color, Player::White);
        assert!(CastlingRight::ALL
            .into_iter()
            .all(|right| fen.castling.contains(right)));
        assert_eq!(fen.en_passant_square(), None);
        assert_eq!(fen.to_string(), START);
    }

    #[test]
    fn test_extra_whitespace_is_ignored() {
        let fen: Fen = "  8/8/8/8/8/8/8/8   w  -  -  0  1 ".parse().unwrap();
        assert_eq!(fen.to_string(), "8/8/8/8/8/8/8/8 w - - 0 1");
    }

    #[test_case("8/8/8/8/8/8/8/8 w - - 0", 5)]
    #[test_case("8/8/8/8/8/8/8/8 w - - 0 1 extra", 7)]
    #[test_case("", 0)]
    fn test_wrong_field_count(record: &str, count: usize) {
        assert_eq!(
            record.parse::<Fen>().unwrap_err(),
            FenError::WrongFieldCount(count)
        );
    }

    #[test_case("7/8/8/8/8/8/8/8 x X - 0 1", FenError::MissingFiles { rank: 8 })]
    #[test_case("8/8/8/8/8/8/8/8 x X - 0 1", FenError::InvalidActiveColor('x'))]
    #[test_case("8/8/8/8/8/8/8/8 w X - 0 1", FenError::InvalidCastlingCharacter('X'))]
    fn test_fields_are_checked_in_order(record: &str, expected: FenError) {
        assert_eq!(record.parse::<Fen>().unwrap_err(), expected);
    }

    #[test]
    fn test_counters_are_not_validated() {
        let fen: Fen = "8/8/8/8/8/8/8/8 w - z9 many none".parse().unwrap();
        assert_eq!(fen.en_passant_square(), Some("z9"));
        assert_eq!(fen.halfmove_clock, "many");
        assert_eq!(fen.fullmove_number, "none");
    }
}
