use std::process::ExitCode;

use fen_board::cli::{Cli, FAILURE};
use fen_board::{render_board, Palette};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = match Cli::try_parse_fields(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            // Usage goes to stderr; a failed write there has nowhere to be reported.
            e.print().ok();
            return ExitCode::from(FAILURE);
        }
    };

    match cli.to_fen() {
        Ok(fen) => {
            debug!(board = %fen.board.as_ascii(), "rendering board");
            print!("{}", render_board(&fen, &Palette::DEFAULT));
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "rejected FEN record");
            eprintln!("{}", e);
            ExitCode::from(FAILURE)
        }
    }
}
