mod castling;
mod coord;
mod errors;
mod parse;
mod piece;

use itertools::Itertools;

pub use castling::{CastlingRight, CastlingRights};
pub use coord::Coord;
pub use errors::{BoardError, FenError};
pub use parse::parse_active_color;
pub use piece::{Piece, PieceType, Player};

use parse::parse_fen_position;

/// A single cell of the board: empty, or one of the twelve colored pieces.
pub type Square = Option<Piece>;

// Coordinates on the board are given by a rank and a file.
// The file is a letter from a to h, and the rank is a number from 1 to 8.
// The file are the columns, and the rank are the rows.
//
// The grid is stored rank first, with rank 1 at index 0, so `squares[0][0]`
// is a1 and `squares[7][7]` is h8.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    squares: [[Square; 8]; 8],
}

impl Board {
    pub fn empty() -> Board {
        Board::default()
    }

    pub fn from_fen_position(fen: &str) -> Result<Board, FenError> {
        let squares = parse_fen_position(fen)?;
        Ok(Board { squares })
    }

    pub fn get(&self, coord: Coord) -> Square {
        self.squares[coord.rank as usize][coord.file as usize]
    }

    /// Write the placement back out in FEN, merging runs of empty squares
    /// into a single digit.
    pub fn to_fen_position(&self) -> String {
        self.squares.iter().rev().map(encode_rank).join("/")
    }

    /// Give the positions of the board in ascii format.
    /// The board is printed with the white pieces, ie rank 1, on the bottom.
    /// Terminated with a newline.
    pub fn as_ascii(&self) -> String {
        let blank = '.';
        let mut s = String::new();

        // Iterate over the ranks in reverse order, so that rank 1 is printed last.
        self.squares.iter().rev().for_each(|row| {
            row.iter().for_each(|piece| {
                s.push(match piece {
                    Some(piece) => piece.as_ascii(),
                    None => blank,
                });
            });
            s.push('\n');
        });
        s
    }
}

fn encode_rank(rank: &[Square; 8]) -> String {
    let mut s = String::new();
    for (empty, run) in &rank.iter().group_by(|square| square.is_none()) {
        if empty {
            s.push_str(&run.count().to_string());
        } else {
            run.flatten().for_each(|piece| s.push(piece.as_ascii()));
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn test_empty_board() {
        let board = Board::from_fen_position("8/8/8/8/8/8/8/8").unwrap();
        assert_eq!(board, Board::empty());
        assert_eq!(board.to_fen_position(), "8/8/8/8/8/8/8/8");
    }

    #[test]
    fn test_starting_position() {
        let board = Board::from_fen_position(START).unwrap();

        let a1 = Coord::from_string("a1").unwrap();
        let expected = Some(Piece::new(PieceType::Rook, Player::White));
        assert_eq!(board.get(a1), expected, "White rook is a1");

        let e8 = Coord::from_string("e8").unwrap();
        let expected = Some(Piece::new(PieceType::King, Player::Black));
        assert_eq!(board.get(e8), expected, "Black king is e8");

        for file in 0..8 {
            let white = [0, 1].map(|rank| board.get(Coord::new(file, rank)));
            let black = [6, 7].map(|rank| board.get(Coord::new(file, rank)));
            assert!(white.iter().flatten().all(|p| p.player == Player::White));
            assert!(black.iter().flatten().all(|p| p.player == Player::Black));
            assert!((2..6).all(|rank| board.get(Coord::new(file, rank)).is_none()));
        }
    }

    #[test]
    fn test_board_to_ascii() {
        let board =
            Board::from_fen_position("rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R").unwrap();

        let expected = indoc! {"
            rnbqkbnr
            pp.ppppp
            ........
            ..p.....
            ....P...
            .....N..
            PPPP.PPP
            RNBQKB.R
            "};

        assert_eq!(board.as_ascii(), expected)
    }

    #[test_case(START)]
    #[test_case("8/8/8/8/8/8/8/8")]
    #[test_case("rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R")]
    #[test_case("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R")]
    #[test_case("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8")]
    fn test_canonical_placement_round_trips(fen: &str) {
        let board = Board::from_fen_position(fen).unwrap();
        assert_eq!(board.to_fen_position(), fen);
    }

    #[test_case("44/8/8/8/8/8/8/8", "8/8/8/8/8/8/8/8")]
    #[test_case("1111p111/8/8/8/8/8/8/8", "4p3/8/8/8/8/8/8/8")]
    #[test_case("k7/8/8/8/8/8/8/3121K", "k7/8/8/8/8/8/8/7K")]
    fn test_split_runs_are_merged(fen: &str, canonical: &str) {
        let board = Board::from_fen_position(fen).unwrap();
        let encoded = board.to_fen_position();
        assert_eq!(encoded, canonical);
        assert_eq!(Board::from_fen_position(&encoded).unwrap(), board);
    }
}
