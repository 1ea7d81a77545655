use thiserror::Error;

/// Errors raised while decoding the fields of a FEN record.
///
/// Parsing stops at the first problem found, so only one of these is ever
/// reported for a given record.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum FenError {
    #[error("Invalid FEN piece placement data: missing files in rank {rank}")]
    MissingFiles { rank: usize },
    #[error("Invalid FEN piece placement data: found more than eight ranks")]
    TooManyRanks,
    #[error("Invalid FEN piece placement data: found more than eight files in rank {rank}")]
    TooManyFiles { rank: usize },
    #[error("Invalid character found in FEN piece placement data: \"{0}\"")]
    InvalidPlacementCharacter(char),
    #[error("Invalid character found in FEN castling availability field: \"{0}\"")]
    InvalidCastlingCharacter(char),
    #[error("Invalid FEN record: unrecognized active color \"{0}\"")]
    InvalidActiveColor(char),
    #[error("Invalid FEN record: missing active color")]
    MissingActiveColor,
    #[error("Invalid FEN record: expected 6 fields, found {0}")]
    WrongFieldCount(usize),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid coordinate string: {0}, expected format: [a-h][1-8]")]
    MalformedCoordinateString(String),
    #[error("Invalid coordinate: {0}, expected range: [a-h][1-8]")]
    CoordinateOutOfRange(String),
}
