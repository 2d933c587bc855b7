use std::fmt;

/// A board coordinate. Both `rank` and `file` run 1-8, file 1 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub rank: u8,
    pub file: u8,
}

impl Square {
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        if (1..=8).contains(&file) && (1..=8).contains(&rank) {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// Builds a square from zero-based grid indices, where row 0 is rank 8.
    pub fn from_indices(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self {
                rank: 8 - row as u8,
                file: col as u8 + 1,
            })
        } else {
            None
        }
    }

    /// Grid row of this square; row 0 holds rank 8.
    pub fn row(self) -> usize {
        8 - self.rank as usize
    }

    pub fn col(self) -> usize {
        self.file as usize - 1
    }

    /// The square `dr` rows and `dc` columns away, if it is still on the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row() as i8 + dr;
        let col = self.col() as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Self::from_indices(row as usize, col as usize)
        } else {
            None
        }
    }

    pub fn file_char(self) -> char {
        (b'a' + self.file - 1) as char
    }

    pub fn from_algebraic(notation: &str) -> Option<Self> {
        let mut chars = notation.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return None,
        };

        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }

        Some(Self {
            file: (file as u8) - b'a' + 1,
            rank: (rank as u8) - b'0',
        })
    }

    pub fn to_algebraic(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank)
    }
}
