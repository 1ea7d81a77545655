//! Draw a FEN record as a framed, 24-bit colored board for the terminal.
//!
//! Rank 8 is drawn at the top. Every row is prefixed with its rank number and
//! some rows carry a note about the rest of the record: side to move,
//! castling rights and the en passant target. The move counters are written
//! next to the bottom border.
use std::fmt::{self, Display, Formatter};

use owo_colors::{DynColor, OwoColorize, Rgb, Style};

use crate::common::{CastlingRight, Coord, PieceType, Player, Square};
use crate::fen::Fen;

const SPACE_SEPARATOR: &str = "    ";
const RESET: &str = "\x1b[0m";

/// The six colors used to draw the board.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub light_square: Rgb,
    pub dark_square: Rgb,
    pub white_on_light: Rgb,
    pub black_on_light: Rgb,
    pub white_on_dark: Rgb,
    pub black_on_dark: Rgb,
}

impl Palette {
    pub const DEFAULT: Palette = Palette {
        light_square: Rgb(201, 169, 116),
        dark_square: Rgb(134, 95, 58),
        white_on_light: Rgb(255, 255, 255),
        black_on_light: Rgb(0, 0, 0),
        white_on_dark: Rgb(255, 255, 255),
        black_on_dark: Rgb(0, 0, 0),
    };

    fn square(&self, light: bool) -> Rgb {
        if light {
            self.light_square
        } else {
            self.dark_square
        }
    }

    fn piece(&self, player: Player, light: bool) -> Rgb {
        match (player, light) {
            (Player::White, true) => self.white_on_light,
            (Player::Black, true) => self.black_on_light,
            (Player::White, false) => self.white_on_dark,
            (Player::Black, false) => self.black_on_dark,
        }
    }
}

struct Fg(Rgb);

impl Display for Fg {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt_ansi_fg(f)
    }
}

struct Bg(Rgb);

impl Display for Bg {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt_ansi_bg(f)
    }
}

/// Both sides use the filled glyphs; the palette tells them apart. Empty
/// squares are a blank on either square color.
fn glyph(square: Square) -> char {
    let Some(piece) = square else {
        return ' ';
    };
    match piece.piece_type {
        PieceType::King => '♚',
        PieceType::Queen => '♛',
        PieceType::Rook => '♜',
        PieceType::Bishop => '♝',
        PieceType::Knight => '♞',
        PieceType::Pawn => '♟',
    }
}

fn checkbox(checked: bool) -> char {
    if checked {
        '☑'
    } else {
        '☐'
    }
}

/// A `Display` view of a record drawn with a given palette.
pub struct BoardView<'a> {
    fen: &'a Fen,
    palette: &'a Palette,
}

impl<'a> BoardView<'a> {
    pub fn new(fen: &'a Fen, palette: &'a Palette) -> Self {
        BoardView { fen, palette }
    }

    fn write_rank(&self, f: &mut Formatter<'_>, rank: u8) -> fmt::Result {
        let palette = self.palette;
        write!(f, " {}\u{2009}║", rank + 1)?;
        write!(f, "{}▐", Fg(palette.square(Coord::new(0, rank).is_light())))?;

        for file in 0..8 {
            let coord = Coord::new(file, rank);
            let light = coord.is_light();
            let square = self.fen.board.get(coord);

            if let Some(piece) = square {
                write!(f, "{}", Fg(palette.piece(piece.player, light)))?;
            }
            write!(f, "{}{}", Bg(palette.square(light)), glyph(square))?;

            if file == 7 {
                write!(f, "{RESET}{}▌", Fg(palette.square(light)))?;
            } else {
                write!(
                    f,
                    "{}{}▐",
                    Fg(palette.square(!light)),
                    Bg(palette.square(light))
                )?;
            }
        }
        write!(f, "{RESET}║")?;

        self.write_note(f, rank)?;
        writeln!(f)
    }

    fn write_note(&self, f: &mut Formatter<'_>, rank: u8) -> fmt::Result {
        let fen = self.fen;
        match rank {
            7 => write!(
                f,
                "{SPACE_SEPARATOR}{} to play",
                fen.active_color.style(Style::new().bold().underline())
            ),
            5 => write!(f, "{SPACE_SEPARATOR}{}", "Castling".bold()),
            4 => self.write_castling(f, Player::White),
            3 => self.write_castling(f, Player::Black),
            1 => match fen.en_passant_square() {
                Some(square) => write!(
                    f,
                    "{SPACE_SEPARATOR}{} {square}",
                    "En passant square:".dimmed()
                ),
                None => Ok(()),
            },
            _ => Ok(()),
        }
    }

    fn write_castling(&self, f: &mut Formatter<'_>, player: Player) -> fmt::Result {
        let rights = self.fen.castling;
        write!(
            f,
            "{SPACE_SEPARATOR} {player}:  {} O-O  {} O-O-O",
            checkbox(rights.contains(CastlingRight::kingside(player))),
            checkbox(rights.contains(CastlingRight::queenside(player)))
        )
    }
}

impl Display for BoardView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "   ╔═════════════════╗")?;
        for rank in (0..8).rev() {
            self.write_rank(f, rank)?;
        }
        writeln!(
            f,
            "   ╚═════════════════╝{SPACE_SEPARATOR}Move {}, {} half-moves since last capture",
            self.fen.fullmove_number.bold(),
            self.fen.halfmove_clock
        )?;
        writeln!(f, "     a b c d e f g h ")
    }
}

/// Render the record as it is printed on stdout.
pub fn render_board(fen: &Fen, palette: &Palette) -> String {
    BoardView::new(fen, palette).to_string()
}
