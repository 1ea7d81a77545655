use nom::{
    branch::alt,
    character::complete::{char, one_of},
    combinator::map,
    IResult,
};
use nom_supreme::ParserExt;
use tracing::{debug, trace};

use super::errors::FenError;
use super::piece::{Piece, PieceType, Player};
use super::Square;

/// A single lexical item of the piece placement field.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Token {
    RankBreak,
    Skip(usize),
    Piece(Piece),
}

/// Decode the piece placement field into ranks indexed from rank 1.
///
/// The field lists rank 8 first, so the first rank read is stored at index 7.
/// Squares not named by a piece letter stay empty. Scanning stops at the
/// first problem found.
pub(crate) fn parse_fen_position(fen: &str) -> Result<[[Square; 8]; 8], FenError> {
    let mut squares = [[None; 8]; 8];
    let mut rank = 7;
    let mut file = 0;
    let mut input = fen;

    while let Some(c) = input.chars().next() {
        let (rest, token) =
            parse_token(input).map_err(|_| FenError::InvalidPlacementCharacter(c))?;
        trace!(?token, rank, file, "placement token");

        match token {
            Token::RankBreak => {
                if file < 8 {
                    return Err(FenError::MissingFiles { rank: rank + 1 });
                }
                if rank == 0 {
                    return Err(FenError::TooManyRanks);
                }
                rank -= 1;
                file = 0;
            }
            Token::Skip(count) => {
                if file + count > 8 {
                    return Err(FenError::TooManyFiles { rank: rank + 1 });
                }
                file += count;
            }
            Token::Piece(piece) => {
                if file >= 8 {
                    return Err(FenError::TooManyFiles { rank: rank + 1 });
                }
                squares[rank][file] = Some(piece);
                file += 1;
            }
        }
        input = rest;
    }

    debug!(fen, "parsed piece placement");
    Ok(squares)
}

/// Parse the active color field. Only the first character is looked at.
pub fn parse_active_color(field: &str) -> Result<Player, FenError> {
    match field.chars().next() {
        Some('w') => Ok(Player::White),
        Some('b') => Ok(Player::Black),
        Some(c) => Err(FenError::InvalidActiveColor(c)),
        None => Err(FenError::MissingActiveColor),
    }
}

fn parse_token(input: &str) -> IResult<&str, Token> {
    alt((
        char('/').value(Token::RankBreak),
        map(one_of("12345678"), |digit: char| {
            Token::Skip(digit as usize - '0' as usize)
        }),
        map(parse_piece, Token::Piece),
    ))(input)
}

fn parse_piece(input: &str) -> IResult<&str, Piece> {
    alt((
        char('P').value(Piece::new(PieceType::Pawn, Player::White)),
        char('p').value(Piece::new(PieceType::Pawn, Player::Black)),
        char('R').value(Piece::new(PieceType::Rook, Player::White)),
        char('r').value(Piece::new(PieceType::Rook, Player::Black)),
        char('N').value(Piece::new(PieceType::Knight, Player::White)),
        char('n').value(Piece::new(PieceType::Knight, Player::Black)),
        char('B').value(Piece::new(PieceType::Bishop, Player::White)),
        char('b').value(Piece::new(PieceType::Bishop, Player::Black)),
        char('Q').value(Piece::new(PieceType::Queen, Player::White)),
        char('q').value(Piece::new(PieceType::Queen, Player::Black)),
        char('K').value(Piece::new(PieceType::King, Player::White)),
        char('k').value(Piece::new(PieceType::King, Player::Black)),
    ))(input)
}
