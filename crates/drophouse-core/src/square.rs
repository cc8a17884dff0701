//! Board squares and the row/column coordinate model.

use std::fmt;

/// Width and height of the board every square lives on.
pub const BOARD_SIZE: u8 = 8;

/// A (row, column) pair on the board, both in `0..8`.
///
/// Row 0 is the first rank, column 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardPosition {
    pub row: u8,
    pub column: u8,
}

impl BoardPosition {
    /// Create a position, returning `None` if either coordinate is off the board.
    #[inline]
    pub const fn new(row: u8, column: u8) -> Option<BoardPosition> {
        if row < BOARD_SIZE && column < BOARD_SIZE {
            Some(BoardPosition { row, column })
        } else {
            None
        }
    }

    /// Offset this position by a signed (row, column) delta, returning `None`
    /// if the result leaves the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<BoardPosition> {
        let row = self.row.checked_add_signed(d_row)?;
        let column = self.column.checked_add_signed(d_col)?;
        BoardPosition::new(row, column)
    }

    /// Return the square at this position.
    #[inline]
    pub const fn square(self) -> Square {
        Square(self.row * BOARD_SIZE + self.column)
    }
}

/// A square on the board, encoded row-major as a `u8`.
///
/// Index = row * 8 + column, so a1 = 0, b1 = 1, ..., h8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Create a square from row and column, returning `None` if off the board.
    #[inline]
    pub const fn from_row_column(row: u8, column: u8) -> Option<Square> {
        match BoardPosition::new(row, column) {
            Some(pos) => Some(pos.square()),
            None => None,
        }
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0];
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Square::from_row_column(rank_byte - b'1', file_byte - b'a')
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (rank index, 0 = first rank).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    /// Return the column (file index, 0 = a-file).
    #[inline]
    pub const fn column(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Return the (row, column) position of this square.
    #[inline]
    pub const fn position(self) -> BoardPosition {
        BoardPosition {
            row: self.row(),
            column: self.column(),
        }
    }

    /// Iterate over all 64 squares in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const H1: Square = Square(7);
    pub const A2: Square = Square(8);
    pub const B2: Square = Square(9);
    pub const E2: Square = Square(12);
    pub const H2: Square = Square(15);
    pub const C3: Square = Square(18);
    pub const B4: Square = Square(25);
    pub const E4: Square = Square(28);
    pub const D5: Square = Square(35);
    pub const A7: Square = Square(48);
    pub const D7: Square = Square(51);
    pub const E7: Square = Square(52);
    pub const H7: Square = Square(55);
    pub const A8: Square = Square(56);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const H8: Square = Square(63);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.column()) as char;
        let rank = (b'1' + self.row()) as char;
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
