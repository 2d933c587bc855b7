//! Consistency checks over a whole game library.

use std::ops::Range;

use chess_core::Color;
use log::{info, warn};
use rayon::prelude::*;

use crate::{ChessGame, GameStatus, ParsePolicy, PuzzleError, POSITIONS_PER_GAME};

/// Years a library game may be dated; anything else is a typo.
const YEARS: Range<i32> = 1801..2100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// The game does not carry exactly [`POSITIONS_PER_GAME`] positions.
    PositionCount(usize),
    /// The player of this color has an empty name.
    MissingPlayer(Color),
    YearOutOfRange(i32),
    /// The first position or the final move does not decode.
    Invalid(PuzzleError),
    IllegalFinalMove(String),
    /// The final move is legal but does not end the game in checkmate.
    NotCheckmate(String),
    /// The side to move in the first position is not the side credited with mate.
    WrongMatingSide { expected: Color, to_move: Color },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryIssue {
    /// Index of the game in the library.
    pub index: usize,
    pub kind: IssueKind,
}

pub fn verify_game(game: &ChessGame) -> Result<(), IssueKind> {
    if game.positions.len() != POSITIONS_PER_GAME {
        return Err(IssueKind::PositionCount(game.positions.len()));
    }
    if game.white.is_empty() {
        return Err(IssueKind::MissingPlayer(Color::White));
    }
    if game.black.is_empty() {
        return Err(IssueKind::MissingPlayer(Color::Black));
    }
    if !YEARS.contains(&game.year) {
        return Err(IssueKind::YearOutOfRange(game.year));
    }

    let puzzle = game.puzzle(ParsePolicy::Strict).map_err(IssueKind::Invalid)?;
    let position = puzzle.position();

    if position.active_color() != game.mate_by {
        return Err(IssueKind::WrongMatingSide {
            expected: game.mate_by,
            to_move: position.active_color(),
        });
    }

    let after = puzzle
        .solution()
        .ok_or_else(|| IssueKind::IllegalFinalMove(game.final_move.clone()))?;
    if GameStatus::of(&after) != GameStatus::Checkmate {
        return Err(IssueKind::NotCheckmate(game.final_move.clone()));
    }

    Ok(())
}

/// Checks every game in parallel, returning the defective ones in library order.
pub fn verify_library(games: &[ChessGame]) -> Vec<LibraryIssue> {
    let issues: Vec<LibraryIssue> = games
        .par_iter()
        .enumerate()
        .filter_map(|(index, game)| {
            let kind = verify_game(game).err()?;
            warn!(
                "game {index} ({} vs {}, {}): {kind:?}",
                game.white, game.black, game.year
            );
            Some(LibraryIssue { index, kind })
        })
        .collect();

    info!("verified {} games, {} with issues", games.len(), issues.len());
    issues
}
