use std::fmt;
use std::str::FromStr;

use crate::{MoveParseError, PieceKind, Square};

/// A move between two squares, with the piece a pawn promotes to when it
/// reaches the far rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    /// Compact encoding: origin, destination, then the promotion letter if any.
    pub fn to_uci(&self) -> String {
        self.to_string()
    }

    pub fn from_uci(uci: &str) -> Result<Self, MoveParseError> {
        uci.parse()
    }

    /// True when both endpoints match, regardless of promotion.
    pub fn connects(&self, from: Square, to: Square) -> bool {
        self.from == from && self.to == to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        // Every kind is written; only q, r, b and n decode back.
        match self.promotion {
            Some(kind) => write!(f, "{}", kind.to_char()),
            None => Ok(()),
        }
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 4 && chars.len() != 5 {
            return Err(MoveParseError::BadLength(chars.len()));
        }

        let square = |pair: &[char]| {
            let text: String = pair.iter().collect();
            Square::from_algebraic(&text).ok_or(MoveParseError::InvalidSquare(text))
        };
        let from = square(&chars[0..2])?;
        let to = square(&chars[2..4])?;

        let promotion = match chars.get(4) {
            None => None,
            Some(&c) => Some(match c {
                'q' => PieceKind::Queen,
                'r' => PieceKind::Rook,
                'b' => PieceKind::Bishop,
                'n' => PieceKind::Knight,
                _ => return Err(MoveParseError::InvalidPromotion(c)),
            }),
        };

        Ok(Self {
            from,
            to,
            promotion,
        })
    }
}
