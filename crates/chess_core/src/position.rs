use std::str::FromStr;

use log::debug;

use crate::attacks::is_attacked;
use crate::{Board, Color, FenError, Move, Piece, PieceKind, Square};

/// Full position string of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const ALL: Self = Self {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: Self = Self {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    /// Reads a castling field; each of `KQkq` present grants its right.
    pub fn from_field(field: &str) -> Self {
        Self {
            white_kingside: field.contains('K'),
            white_queenside: field.contains('Q'),
            black_kingside: field.contains('k'),
            black_queenside: field.contains('q'),
        }
    }

    pub fn kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    pub fn queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    pub fn revoke_both(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            Color::Black => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
        }
    }

    /// Revokes the right a `color` rook leaving `sq` gives up. A rook standing
    /// in the other side's corner gives up nothing.
    pub fn revoke_rook_home(&mut self, color: Color, sq: Square) {
        match (color, sq.rank, sq.file) {
            (Color::White, 1, 8) => self.white_kingside = false,
            (Color::White, 1, 1) => self.white_queenside = false,
            (Color::Black, 8, 8) => self.black_kingside = false,
            (Color::Black, 8, 1) => self.black_queenside = false,
            _ => {}
        }
    }

    /// Revokes the single right tied to a rook's home corner, if `sq` is one.
    pub fn revoke_corner(&mut self, sq: Square) {
        match (sq.rank, sq.file) {
            (1, 8) => self.white_kingside = false,
            (1, 1) => self.white_queenside = false,
            (8, 8) => self.black_kingside = false,
            (8, 1) => self.black_queenside = false,
            _ => {}
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}

/// A board together with side to move, castling rights and en-passant target.
///
/// Positions are plain values: [`Position::apply`] returns a new position and
/// never touches the one it was called on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    active: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
}

impl Position {
    pub fn new(
        board: Board,
        active: Color,
        castling: CastlingRights,
        en_passant: Option<Square>,
    ) -> Self {
        Self {
            board,
            active,
            castling,
            en_passant,
        }
    }

    pub fn starting() -> Self {
        Self::new(Board::starting(), Color::White, CastlingRights::ALL, None)
    }

    /// Parses a position string. Only the placement field is required.
    ///
    /// Missing or unusual trailing fields fall back to defaults: white to
    /// move, every castling right granted when the field is absent, and no
    /// en-passant target unless the field names a valid square. Clocks are
    /// ignored.
    pub fn from_fen(text: &str) -> Result<Self, FenError> {
        let mut fields = text.split(' ');
        let board = Board::from_placement(fields.next().unwrap_or_default())?;

        let active = match fields.next() {
            Some("b") => Color::Black,
            _ => Color::White,
        };

        let castling = fields
            .next()
            .map(CastlingRights::from_field)
            .unwrap_or(CastlingRights::ALL);

        let en_passant = match fields.next() {
            None | Some("-") => None,
            Some(field) => Square::from_algebraic(field),
        };

        let position = Self::new(board, active, castling, en_passant);
        debug!("parsed position: {active:?} to move, {castling:?}, en passant {en_passant:?}");
        Ok(position)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_color(&self) -> Color {
        self.active
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn get_piece(&self, sq: Square) -> Option<Piece> {
        self.board.get_piece(sq)
    }

    /// Whether `color`'s king stands attacked. A side with no king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.board.king_square(color) {
            Some(king) => is_attacked(king, color.opponent(), &self.board),
            None => false,
        }
    }

    /// Plays `mv` and returns the resulting position.
    ///
    /// The move does not have to be legal, but only pseudo-legal moves have a
    /// meaningful result. A move from an empty square only flips the side to
    /// move and clears the en-passant target.
    pub fn apply(&self, mv: Move) -> Position {
        let mut board = self.board;
        let mut castling = self.castling;
        let mut en_passant = None;

        let piece = match board.take_piece(mv.from) {
            Some(piece) => piece,
            None => {
                debug!("applying {mv} from an empty square");
                return Self::new(board, self.active.opponent(), castling, None);
            }
        };

        if piece.kind == PieceKind::Pawn && self.en_passant == Some(mv.to) {
            if let Some(captured) = Square::new(mv.to.file, mv.from.rank) {
                board.set_piece(captured, None);
            }
        }

        if piece.kind == PieceKind::King {
            let file_delta = mv.to.file as i8 - mv.from.file as i8;
            if file_delta.abs() == 2 {
                let (rook_from, rook_to) = if file_delta > 0 { (8, 6) } else { (1, 4) };
                let rank = mv.from.rank;
                board.set_piece(Square { file: rook_from, rank }, None);
                board.set_piece(
                    Square { file: rook_to, rank },
                    Some(Piece::new(PieceKind::Rook, piece.color)),
                );
            }
            castling.revoke_both(piece.color);
        }

        if piece.kind == PieceKind::Rook {
            castling.revoke_rook_home(piece.color, mv.from);
        }

        if let Some(captured) = board.get_piece(mv.to) {
            if captured.kind == PieceKind::Rook {
                castling.revoke_corner(mv.to);
            }
        }

        if piece.kind == PieceKind::Pawn && mv.from.rank.abs_diff(mv.to.rank) == 2 {
            en_passant = Square::new(mv.from.file, (mv.from.rank + mv.to.rank) / 2);
        }

        let placed = match mv.promotion {
            Some(kind) => Piece::new(kind, piece.color),
            None => piece,
        };
        board.set_piece(mv.to, Some(placed));

        Self::new(board, self.active.opponent(), castling, en_passant)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::starting()
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn mv(uci: &str) -> Move {
        Move::from_uci(uci).unwrap()
    }

    #[test]
    fn parses_starting_position() {
        let position = Position::from_fen(STARTING_FEN).unwrap();
        assert_eq!(position, Position::starting());
        assert_eq!(position.active_color(), Color::White);
        assert_eq!(position.castling_rights(), CastlingRights::ALL);
        assert_eq!(position.en_passant(), None);
    }

    #[test]
    fn parses_active_color() {
        let black: Position = "8/8/8/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert_eq!(black.active_color(), Color::Black);
        let odd: Position = "8/8/8/8/8/8/8/8 x - - 0 1".parse().unwrap();
        assert_eq!(odd.active_color(), Color::White);
        let upper: Position = "8/8/8/8/8/8/8/8 B".parse().unwrap();
        assert_eq!(upper.active_color(), Color::White);
    }

    #[test]
    fn missing_castling_field_grants_everything() {
        let bare = Position::from_fen("8/8/8/8/8/8/8/8").unwrap();
        assert_eq!(bare.castling_rights(), CastlingRights::ALL);
        let with_color = Position::from_fen("8/8/8/8/8/8/8/8 w").unwrap();
        assert_eq!(with_color.castling_rights(), CastlingRights::ALL);
        let dash = Position::from_fen("8/8/8/8/8/8/8/8 w -").unwrap();
        assert_eq!(dash.castling_rights(), CastlingRights::NONE);
    }

    #[test]
    fn parses_castling_characters() {
        let position = Position::from_fen("8/8/8/8/8/8/8/8 w Kq - 0 1").unwrap();
        let rights = position.castling_rights();
        assert!(rights.white_kingside);
        assert!(!rights.white_queenside);
        assert!(!rights.black_kingside);
        assert!(rights.black_queenside);
    }

    #[test]
    fn parses_en_passant() {
        let position = Position::from_fen("8/8/8/3pP3/8/8/8/8 w - d6 0 1").unwrap();
        assert_eq!(position.en_passant(), Some(sq("d6")));
        let garbage = Position::from_fen("8/8/8/3pP3/8/8/8/8 w - zz 0 1").unwrap();
        assert_eq!(garbage.en_passant(), None);
    }

    #[test]
    fn malformed_placement_is_an_error() {
        assert_eq!(
            Position::from_fen("invalid_fen_string"),
            Err(FenError::MalformedRankCount(1))
        );
    }

    #[test]
    fn apply_moves_piece_and_sets_en_passant() {
        let start = Position::starting();
        let next = start.apply(mv("e2e4"));
        assert_eq!(next.get_piece(sq("e2")), None);
        assert_eq!(
            next.get_piece(sq("e4")),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(next.active_color(), Color::Black);
        assert_eq!(next.en_passant(), Some(sq("e3")));

        let reply = next.apply(mv("g8f6"));
        assert_eq!(reply.en_passant(), None);
        // the original is untouched
        assert_eq!(start, Position::starting());
    }

    #[test]
    fn apply_en_passant_removes_captured_pawn() {
        let position = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        let next = position.apply(mv("e5d6"));
        assert_eq!(next.get_piece(sq("d5")), None);
        assert_eq!(next.get_piece(sq("e5")), None);
        assert_eq!(
            next.get_piece(sq("d6")),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
    }

    #[test]
    fn apply_castling_moves_rook() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let kingside = position.apply(mv("e1g1"));
        assert_eq!(
            kingside.get_piece(sq("g1")),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            kingside.get_piece(sq("f1")),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert_eq!(kingside.get_piece(sq("h1")), None);
        assert!(!kingside.castling_rights().white_kingside);
        assert!(!kingside.castling_rights().white_queenside);
        assert!(kingside.castling_rights().black_kingside);

        let queenside = position.apply(mv("e1c1"));
        assert_eq!(
            queenside.get_piece(sq("d1")),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert_eq!(queenside.get_piece(sq("a1")), None);
    }

    #[test]
    fn rook_moves_and_captures_revoke_rights() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let rook_moved = position.apply(mv("a1a2"));
        assert!(!rook_moved.castling_rights().white_queenside);
        assert!(rook_moved.castling_rights().white_kingside);

        let captured = position.apply(mv("h1h8"));
        let rights = captured.castling_rights();
        assert!(!rights.white_kingside);
        assert!(!rights.black_kingside);
        assert!(rights.white_queenside);
        assert!(rights.black_queenside);
    }

    #[test]
    fn rook_in_enemy_corner_keeps_other_side_rights() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/r3K3 b Q - 0 1").unwrap();
        let next = position.apply(mv("a1a2"));
        assert!(next.castling_rights().white_queenside);

        let white_rook = Position::from_fen("R3k3/8/8/8/8/8/8/4K3 w q - 0 1").unwrap();
        let next = white_rook.apply(mv("a8b8"));
        assert!(next.castling_rights().black_queenside);
    }

    #[test]
    fn plain_king_move_revokes_both_rights() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
        let next = position.apply(mv("e8d8"));
        assert!(!next.castling_rights().black_kingside);
        assert!(!next.castling_rights().black_queenside);
        assert!(next.castling_rights().white_kingside);
    }

    #[test]
    fn apply_promotion_replaces_pawn() {
        let position = Position::from_fen("8/4P3/8/8/8/8/8/4K1k1 w - - 0 1").unwrap();
        let next = position.apply(mv("e7e8q"));
        assert_eq!(
            next.get_piece(sq("e8")),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        assert_eq!(next.get_piece(sq("e7")), None);
    }

    #[test]
    fn check_detection() {
        let check = Position::from_fen("4r3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(check.is_in_check(Color::White));
        let clear = Position::from_fen("3r4/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(!clear.is_in_check(Color::White));
        let kingless = Position::from_fen("4r3/8/8/8/8/8/8/8 w - - 0 1").unwrap();
        assert!(!kingless.is_in_check(Color::White));
    }
}
