// Puzzle-side use of the rules engine: game records, guess checking, library checks
pub mod error;
pub mod game;
pub mod library;
pub mod puzzle;
pub mod status;

pub use error::PuzzleError;
pub use game::{ChessGame, POSITIONS_PER_GAME};
pub use library::{verify_game, verify_library, IssueKind, LibraryIssue};
pub use puzzle::{Guess, ParsePolicy, Puzzle, Selection, Verdict};
pub use status::GameStatus;
