//! Command line surface: six positional FEN fields.
use std::ffi::OsString;
use std::iter;

use clap::Parser;

use crate::common::FenError;
use crate::fen::Fen;

/// Exit status for usage and input errors.
pub const FAILURE: u8 = 1;

#[derive(Parser, Debug)]
#[command(
    name = "fen-board",
    about = "Draw a FEN chess position as a colored board in the terminal",
    after_help = "A valid FEN record contains six fields, each passed as a separate argument.",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Piece placement, rank 8 first, e.g. rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR
    #[arg(allow_hyphen_values = true)]
    pub placement: String,
    /// Side to move: w or b
    #[arg(allow_hyphen_values = true)]
    pub active_color: String,
    /// Castling availability, e.g. KQkq or -
    #[arg(allow_hyphen_values = true)]
    pub castling: String,
    /// En passant target square, or -
    #[arg(allow_hyphen_values = true)]
    pub en_passant: String,
    /// Halfmove clock
    #[arg(allow_hyphen_values = true)]
    pub halfmove_clock: String,
    /// Fullmove number
    #[arg(allow_hyphen_values = true)]
    pub fullmove_number: String,
}

impl Cli {
    /// Parse a full argument list, program name first.
    ///
    /// Every argument after the program name is a field. An escape marker is
    /// inserted ahead of them so that `--`, `-h` and the like reach the field
    /// parsers unchanged instead of being read as options.
    pub fn try_parse_fields<I, T>(args: I) -> Result<Cli, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::<OsString>::into);
        let program = args.next().unwrap_or_else(|| OsString::from("fen-board"));
        Cli::try_parse_from(
            iter::once(program)
                .chain(iter::once(OsString::from("--")))
                .chain(args),
        )
    }

    pub fn to_fen(&self) -> Result<Fen, FenError> {
        Fen::from_fields(
            &self.placement,
            &self.active_color,
            &self.castling,
            &self.en_passant,
            &self.halfmove_clock,
            &self.fullmove_number,
        )
    }
}
