//! Parse Forsyth-Edwards Notation records and draw them as colored boards in
//! the terminal.
//!
pub mod cli;
mod common;
mod fen;
mod render;

pub use common::{
    parse_active_color, Board, BoardError, CastlingRight, CastlingRights, Coord, FenError, Piece,
    PieceType, Player, Square,
};
pub use fen::Fen;
pub use render::{render_board, BoardView, Palette};
