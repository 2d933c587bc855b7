//! Line-of-sight attack detection on a [`Board`].

use crate::{Board, Color, Piece, PieceKind, Square};

/// (row, column) steps of a knight jump.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Whether any piece of `by` attacks `sq`.
///
/// Walks each ray outward from the target; the first occupied square on a ray
/// decides it. Kings and pawns only count when they are adjacent, and a pawn
/// only along the diagonal it captures on.
pub fn is_attacked(sq: Square, by: Color, board: &Board) -> bool {
    let knight = KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| sq.offset(dr, dc))
        .filter_map(|target| board.get_piece(target))
        .any(|piece| piece.is(PieceKind::Knight, by));
    if knight {
        return true;
    }

    for &(dr, dc) in DIAGONALS.iter() {
        if let Some((distance, piece)) = first_on_ray(sq, dr, dc, board) {
            if piece.color != by {
                continue;
            }
            match piece.kind {
                PieceKind::Bishop | PieceKind::Queen => return true,
                PieceKind::King if distance == 1 => return true,
                // The pawn sits one row behind the target, relative to its own direction.
                PieceKind::Pawn if distance == 1 && dr == -by.forward() => return true,
                _ => {}
            }
        }
    }

    for &(dr, dc) in ORTHOGONALS.iter() {
        if let Some((distance, piece)) = first_on_ray(sq, dr, dc, board) {
            if piece.color != by {
                continue;
            }
            match piece.kind {
                PieceKind::Rook | PieceKind::Queen => return true,
                PieceKind::King if distance == 1 => return true,
                _ => {}
            }
        }
    }

    false
}

/// First occupied square walking from `from` in direction (dr, dc), with its distance.
fn first_on_ray(from: Square, dr: i8, dc: i8, board: &Board) -> Option<(u8, Piece)> {
    let mut current = from;
    let mut distance = 0;
    while let Some(next) = current.offset(dr, dc) {
        distance += 1;
        if let Some(piece) = board.get_piece(next) {
            return Some((distance, piece));
        }
        current = next;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(placement: &str) -> Board {
        Board::from_placement(placement).unwrap()
    }

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn knight_attacks() {
        let b = board("8/8/8/8/4N3/8/8/8");
        assert!(is_attacked(sq("f6"), Color::White, &b));
        assert!(is_attacked(sq("c3"), Color::White, &b));
        assert!(!is_attacked(sq("e5"), Color::White, &b));
        assert!(!is_attacked(sq("f6"), Color::Black, &b));
    }

    #[test]
    fn pawns_attack_forward_only() {
        let b = board("8/8/8/3p4/4P3/8/8/8");
        // white pawn e4 covers d5 and f5, not d3
        assert!(is_attacked(sq("d5"), Color::White, &b));
        assert!(is_attacked(sq("f5"), Color::White, &b));
        assert!(!is_attacked(sq("d3"), Color::White, &b));
        assert!(!is_attacked(sq("e5"), Color::White, &b));
        // black pawn d5 covers c4 and e4, not e6
        assert!(is_attacked(sq("e4"), Color::Black, &b));
        assert!(is_attacked(sq("c4"), Color::Black, &b));
        assert!(!is_attacked(sq("e6"), Color::Black, &b));
    }

    #[test]
    fn sliders_are_blocked() {
        let b = board("4r3/8/8/8/4P3/8/8/4K3");
        assert!(is_attacked(sq("e5"), Color::Black, &b));
        assert!(is_attacked(sq("e4"), Color::Black, &b));
        assert!(!is_attacked(sq("e1"), Color::Black, &b));
        assert!(is_attacked(sq("a8"), Color::Black, &b));
    }

    #[test]
    fn bishop_and_queen_diagonals() {
        let b = board("8/8/8/8/8/8/5b2/4K2q");
        assert!(is_attacked(sq("e1"), Color::Black, &b));
        assert!(is_attacked(sq("g1"), Color::Black, &b));
        assert!(is_attacked(sq("f1"), Color::Black, &b));
        assert!(!is_attacked(sq("d1"), Color::Black, &b));
    }

    #[test]
    fn king_attacks_adjacent_only() {
        let b = board("8/8/8/8/8/8/8/4K3");
        assert!(is_attacked(sq("d2"), Color::White, &b));
        assert!(is_attacked(sq("e2"), Color::White, &b));
        assert!(!is_attacked(sq("e3"), Color::White, &b));
        assert!(!is_attacked(sq("c3"), Color::White, &b));
    }

    #[test]
    fn own_pieces_do_not_attack() {
        let b = board("8/8/8/8/8/8/8/R3K3");
        assert!(!is_attacked(sq("a5"), Color::Black, &b));
        assert!(is_attacked(sq("a5"), Color::White, &b));
    }
}
