use log::trace;

use crate::{Color, FenError, Piece, PieceKind, Square};

/// Placement field of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// An 8x8 grid of optional pieces, row-major, row 0 = rank 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn starting() -> Self {
        let mut board = Self::empty();

        let white_pawn = Some(Piece::new(PieceKind::Pawn, Color::White));
        let black_pawn = Some(Piece::new(PieceKind::Pawn, Color::Black));
        for file in 1..=8 {
            board.set_piece(Square { file, rank: 2 }, white_pawn);
            board.set_piece(Square { file, rank: 7 }, black_pawn);
        }

        let piece_order = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for (file, &kind) in (1..=8).zip(piece_order.iter()) {
            board.set_piece(Square { file, rank: 1 }, Some(Piece::new(kind, Color::White)));
            board.set_piece(Square { file, rank: 8 }, Some(Piece::new(kind, Color::Black)));
        }

        board
    }

    /// Decodes a piece-placement field. Anything after the first space is ignored.
    ///
    /// Digits 1-8 are runs of empty squares and `kqrbnp` letters are pieces,
    /// uppercase for white. Any other character contributes no squares and is
    /// skipped; only the rank count and the decoded width of each rank are
    /// errors.
    pub fn from_placement(text: &str) -> Result<Self, FenError> {
        let placement = text.split(' ').next().unwrap_or_default();

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::MalformedRankCount(ranks.len()));
        }

        let mut board = Self::empty();
        for (index, rank) in ranks.iter().enumerate() {
            let mut row: Vec<Option<Piece>> = Vec::with_capacity(8);
            for ch in rank.chars() {
                match ch.to_digit(10) {
                    Some(run @ 1..=8) => row.extend((0..run).map(|_| None)),
                    _ => match Piece::from_char(ch) {
                        Some(piece) => row.push(Some(piece)),
                        None => trace!("skipping placement character {ch:?} in rank {index}"),
                    },
                }
            }

            board.squares[index] = row
                .try_into()
                .map_err(|row: Vec<Option<Piece>>| FenError::MalformedRankWidth {
                    index,
                    width: row.len(),
                })?;
        }

        Ok(board)
    }

    pub fn get_piece(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.col()]
    }

    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row()][sq.col()] = piece;
    }

    /// Empties `sq`, returning whatever stood there.
    pub fn take_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.col()].take()
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.get_piece(sq).is_none()
    }

    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }

    /// Occupied squares in row-major order, starting from a8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                let piece = (*cell)?;
                Square::from_indices(row, col).map(|sq| (sq, piece))
            })
        })
    }

    /// First king of `color` found in row-major order.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.is(PieceKind::King, color))
            .map(|(sq, _)| sq)
    }
}
