// Chess rules: position parsing, legal move generation, move application
pub mod attacks;
pub mod board;
pub mod error;
pub mod movegen;
pub mod moves;
pub mod piece;
pub mod position;
pub mod square;

// Re-export main types for convenience
pub use attacks::is_attacked;
pub use board::{Board, STARTING_PLACEMENT};
pub use error::{FenError, MoveParseError};
pub use movegen::pseudo_legal_moves;
pub use moves::Move;
pub use piece::{Color, Piece, PieceKind};
pub use position::{CastlingRights, Position, STARTING_FEN};
pub use square::Square;
