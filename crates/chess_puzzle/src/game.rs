use chess_core::{Color, Position};
use serde::{Deserialize, Serialize};

use crate::{ParsePolicy, Puzzle, PuzzleError};

/// Number of positions a library game carries, one per move before mate.
pub const POSITIONS_PER_GAME: usize = 12;

/// A finished game that ends in checkmate, as shipped in the game library.
///
/// Library files store games as JSON objects with camelCase keys. Records
/// written before `mateBy` and `finalMove` existed decode with White as the
/// mating side and an empty final move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChessGame {
    pub white: String,
    pub black: String,
    /// Ratings as printed; "?" when unknown.
    pub white_elo: String,
    pub black_elo: String,
    pub tournament: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<String>,
    /// Side that delivers the final checkmate.
    #[serde(default = "default_mate_by")]
    pub mate_by: Color,
    /// The mating move in compact encoding, e.g. `e7e8q`.
    #[serde(default)]
    pub final_move: String,
    /// `positions[i]` is the position `i + 1` moves before mate.
    pub positions: Vec<String>,
}

fn default_mate_by() -> Color {
    Color::White
}

impl ChessGame {
    pub fn position_at(&self, index: usize, policy: ParsePolicy) -> Result<Position, PuzzleError> {
        let fen = self.positions.get(index).ok_or(PuzzleError::NoPositions)?;
        Ok(policy.parse(fen)?)
    }

    /// The position one move before mate, with the mating move as its answer.
    pub fn puzzle(&self, policy: ParsePolicy) -> Result<Puzzle, PuzzleError> {
        let position = self.position_at(0, policy)?;
        Puzzle::new(position, &self.final_move)
    }
}
