use thiserror::Error;

/// Failure to decode the piece-placement field of a position string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("placement field has {0} ranks, expected 8")]
    MalformedRankCount(usize),
    #[error("rank {index} decodes to {width} squares, expected 8")]
    MalformedRankWidth { index: usize, width: usize },
}

/// Failure to decode a compact move such as `e2e4` or `e7e8q`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("move has {0} characters, expected 4 or 5")]
    BadLength(usize),
    #[error("invalid square {0:?}")]
    InvalidSquare(String),
    #[error("invalid promotion piece {0:?}")]
    InvalidPromotion(char),
}
