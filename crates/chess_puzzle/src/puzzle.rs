use chess_core::{FenError, Move, MoveParseError, Position, Square};
use log::{debug, warn};

use crate::PuzzleError;

/// What to do with a position string whose placement field does not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Hand the error back to the caller.
    #[default]
    Strict,
    /// Show the standard starting position instead.
    FallbackToStart,
}

impl ParsePolicy {
    pub fn parse(self, fen: &str) -> Result<Position, FenError> {
        match (Position::from_fen(fen), self) {
            (Ok(position), _) => Ok(position),
            (Err(err), ParsePolicy::Strict) => Err(err),
            (Err(err), ParsePolicy::FallbackToStart) => {
                warn!("{err} in {fen:?}, using the starting position");
                Ok(Position::starting())
            }
        }
    }
}

/// Result of picking a piece up on one square and dropping it on another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Illegal,
    Move(Move),
    /// A pawn reaches the far rank; one of these still has to be chosen.
    Promotion(Vec<Move>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Unparsable(MoveParseError),
    Illegal,
    Correct,
    Incorrect,
}

/// A submitted answer, ready for the application to store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub submitted: String,
    pub verdict: Verdict,
    pub expected: String,
}

impl Guess {
    pub fn is_correct(&self) -> bool {
        self.verdict == Verdict::Correct
    }
}

/// A position with one expected answer move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    position: Position,
    expected: String,
    expected_move: Move,
}

impl Puzzle {
    pub fn new(position: Position, expected: &str) -> Result<Self, PuzzleError> {
        if expected.is_empty() {
            return Err(PuzzleError::EmptyFinalMove);
        }
        let expected_move = Move::from_uci(expected)?;
        Ok(Self {
            position,
            expected: expected.to_string(),
            expected_move,
        })
    }

    pub fn from_fen(fen: &str, expected: &str, policy: ParsePolicy) -> Result<Self, PuzzleError> {
        let position = policy.parse(fen)?;
        Self::new(position, expected)
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn expected_move(&self) -> Move {
        self.expected_move
    }

    /// The position after the expected move, or `None` when that move is
    /// not legal here.
    pub fn solution(&self) -> Option<Position> {
        let mv = self.expected_move;
        self.position.is_legal(mv).then(|| self.position.apply(mv))
    }

    pub fn select(&self, from: Square, to: Square) -> Selection {
        let mut matches = self.position.legal_moves_between(from, to);
        match matches.len() {
            0 => Selection::Illegal,
            1 => Selection::Move(matches.remove(0)),
            _ => Selection::Promotion(matches),
        }
    }

    /// Judges a submitted move. Legal moves are compared to the expected
    /// answer by their encoded text.
    pub fn evaluate(&self, submitted: &str) -> Verdict {
        let mv = match Move::from_uci(submitted) {
            Ok(mv) => mv,
            Err(err) => return Verdict::Unparsable(err),
        };

        let verdict = if !self.position.is_legal(mv) {
            Verdict::Illegal
        } else if submitted == self.expected {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };
        debug!("guess {submitted} against {}: {verdict:?}", self.expected);
        verdict
    }

    pub fn guess(&self, submitted: &str) -> Guess {
        Guess {
            submitted: submitted.to_string(),
            verdict: self.evaluate(submitted),
            expected: self.expected.clone(),
        }
    }
}
