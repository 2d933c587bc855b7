use chess_core::{FenError, MoveParseError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("invalid position: {0}")]
    Fen(#[from] FenError),
    #[error("invalid move: {0}")]
    Move(#[from] MoveParseError),
    #[error("game has no positions")]
    NoPositions,
    #[error("game has no final move")]
    EmptyFinalMove,
}
