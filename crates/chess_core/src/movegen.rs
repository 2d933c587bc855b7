//! Pseudo-legal move generation per piece kind, and the legality filter on top of it.

use log::trace;

use crate::attacks::{is_attacked, DIAGONALS, KNIGHT_OFFSETS, ORTHOGONALS};
use crate::{Board, Color, Move, Piece, PieceKind, Position, Square};

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ALL_DIRECTIONS: [(i8, i8); 8] = [
    DIAGONALS[0],
    DIAGONALS[1],
    DIAGONALS[2],
    DIAGONALS[3],
    ORTHOGONALS[0],
    ORTHOGONALS[1],
    ORTHOGONALS[2],
    ORTHOGONALS[3],
];

/// Moves the piece on `from` could make by its movement rules alone, without
/// asking whether its own king is left attacked. Empty squares yield nothing.
pub fn pseudo_legal_moves(position: &Position, from: Square) -> Vec<Move> {
    let piece = match position.get_piece(from) {
        Some(piece) => piece,
        None => return Vec::new(),
    };
    let board = position.board();

    let mut moves = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(position, from, piece.color, &mut moves),
        PieceKind::Knight => jump_moves(board, from, piece.color, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::Bishop => slide_moves(board, from, piece.color, &DIAGONALS, &mut moves),
        PieceKind::Rook => slide_moves(board, from, piece.color, &ORTHOGONALS, &mut moves),
        PieceKind::Queen => slide_moves(board, from, piece.color, &ALL_DIRECTIONS, &mut moves),
        PieceKind::King => king_moves(position, from, piece.color, &mut moves),
    }
    moves
}

/// Pushes a pawn move, expanded into one move per promotion kind on the far rank.
fn push_pawn_move(from: Square, to: Square, color: Color, moves: &mut Vec<Move>) {
    if to.row() == color.promotion_row() {
        moves.extend(
            PieceKind::PROMOTIONS
                .iter()
                .map(|&kind| Move::with_promotion(from, to, kind)),
        );
    } else {
        moves.push(Move::new(from, to));
    }
}

fn pawn_moves(position: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    let board = position.board();
    let dir = color.forward();

    if let Some(one) = from.offset(dir, 0) {
        if board.is_empty(one) {
            push_pawn_move(from, one, color, moves);

            if from.row() == color.pawn_start_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.is_empty(two) {
                        moves.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        let target = match from.offset(dir, dc) {
            Some(target) => target,
            None => continue,
        };
        let captures = board
            .get_piece(target)
            .map_or(false, |victim| victim.color != color);
        if captures || position.en_passant() == Some(target) {
            push_pawn_move(from, target, color, moves);
        }
    }
}

fn jump_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in offsets {
        let target = match from.offset(dr, dc) {
            Some(target) => target,
            None => continue,
        };
        match board.get_piece(target) {
            Some(occupant) if occupant.color == color => {}
            _ => moves.push(Move::new(from, target)),
        }
    }
}

fn slide_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            match board.get_piece(next) {
                None => moves.push(Move::new(from, next)),
                Some(occupant) => {
                    if occupant.color != color {
                        moves.push(Move::new(from, next));
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

fn king_moves(position: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    let board = position.board();
    jump_moves(board, from, color, &KING_OFFSETS, moves);

    let rank = match color {
        Color::White => 1,
        Color::Black => 8,
    };
    if from != (Square { file: 5, rank }) {
        return;
    }

    let opponent = color.opponent();
    if is_attacked(from, opponent, board) {
        return;
    }

    let on_rank = |file| Square { file, rank };
    let rook = Piece::new(PieceKind::Rook, color);
    let rights = position.castling_rights();

    if rights.kingside(color)
        && board.is_empty(on_rank(6))
        && board.is_empty(on_rank(7))
        && board.get_piece(on_rank(8)) == Some(rook)
        && !is_attacked(on_rank(6), opponent, board)
        && !is_attacked(on_rank(7), opponent, board)
    {
        moves.push(Move::new(from, on_rank(7)));
    }

    if rights.queenside(color)
        && board.is_empty(on_rank(2))
        && board.is_empty(on_rank(3))
        && board.is_empty(on_rank(4))
        && board.get_piece(on_rank(1)) == Some(rook)
        && !is_attacked(on_rank(3), opponent, board)
        && !is_attacked(on_rank(4), opponent, board)
    {
        moves.push(Move::new(from, on_rank(3)));
    }
}

/// Whether playing `mv` leaves the mover's own king attacked. With no king
/// on the board every move passes.
fn leaves_king_attacked(position: &Position, mv: Move) -> bool {
    let mover = position.active_color();
    let next = position.apply(mv);
    match next.board().king_square(mover) {
        Some(king) => is_attacked(king, mover.opponent(), next.board()),
        None => false,
    }
}

impl Position {
    /// Every legal move for the side to move, in row-major order of the
    /// moving pieces.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mover = self.active_color();
        self.board()
            .pieces()
            .filter(|(_, piece)| piece.color == mover)
            .flat_map(|(from, _)| pseudo_legal_moves(self, from))
            .filter(|&mv| {
                let rejected = leaves_king_attacked(self, mv);
                if rejected {
                    trace!("{mv} leaves the {mover:?} king attacked");
                }
                !rejected
            })
            .collect()
    }

    /// Legal moves connecting `from` and `to`. More than one result means a
    /// promotion piece still has to be chosen.
    pub fn legal_moves_between(&self, from: Square, to: Square) -> Vec<Move> {
        self.legal_moves()
            .into_iter()
            .filter(|mv| mv.connects(from, to))
            .collect()
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.legal_moves().contains(&mv)
    }
}
