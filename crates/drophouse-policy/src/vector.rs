//! Movement vectors between a move's source and destination.

use std::fmt;

use drophouse_core::{Move, Square};

/// A signed (row, column) displacement, each component in `-7..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveVector {
    pub d_row: i8,
    pub d_col: i8,
}

impl MoveVector {
    #[inline]
    pub const fn new(d_row: i8, d_col: i8) -> MoveVector {
        MoveVector { d_row, d_col }
    }

    /// Vector from `source` to `dest`.
    #[inline]
    pub const fn between(source: Square, dest: Square) -> MoveVector {
        MoveVector {
            d_row: dest.row() as i8 - source.row() as i8,
            d_col: dest.column() as i8 - source.column() as i8,
        }
    }

    /// Vector of a move, or `None` for drops (which have no source square).
    #[inline]
    pub fn of(mv: Move) -> Option<MoveVector> {
        mv.source().map(|source| MoveVector::between(source, mv.dest()))
    }

    /// Larger of the two absolute components (Chebyshev distance).
    #[inline]
    pub const fn max_abs(self) -> u8 {
        let r = self.d_row.unsigned_abs();
        let c = self.d_col.unsigned_abs();
        if r > c { r } else { c }
    }

    /// Smaller of the two absolute components.
    #[inline]
    pub const fn min_abs(self) -> u8 {
        let r = self.d_row.unsigned_abs();
        let c = self.d_col.unsigned_abs();
        if r < c { r } else { c }
    }

    /// `true` if the vector has the 1-and-2 shape only a knight can make.
    #[inline]
    pub const fn is_knight_shaped(self) -> bool {
        self.min_abs() == 1 && self.max_abs() == 2
    }
}

impl fmt::Display for MoveVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.d_row, self.d_col)
    }
}

#[cfg(test)]
mod tests {
    use drophouse_core::{Move, PieceKind, Square};

    use super::MoveVector;

    #[test]
    fn vector_between_squares() {
        assert_eq!(MoveVector::between(Square::A1, Square::H8), MoveVector::new(7, 7));
        assert_eq!(MoveVector::between(Square::H8, Square::A1), MoveVector::new(-7, -7));
        assert_eq!(MoveVector::between(Square::B1, Square::C3), MoveVector::new(2, 1));
        assert_eq!(MoveVector::between(Square::E4, Square::E4), MoveVector::new(0, 0));
    }

    #[test]
    fn drops_have_no_vector() {
        assert_eq!(MoveVector::of(Move::new_drop(PieceKind::Pawn, Square::E4)), None);
        assert_eq!(
            MoveVector::of(Move::new(Square::E2, Square::E4)),
            Some(MoveVector::new(2, 0))
        );
    }

    #[test]
    fn knight_shape() {
        assert!(MoveVector::new(2, 1).is_knight_shaped());
        assert!(MoveVector::new(-1, 2).is_knight_shaped());
        assert!(!MoveVector::new(2, 2).is_knight_shaped());
        assert!(!MoveVector::new(1, 3).is_knight_shaped());
        assert!(!MoveVector::new(0, 2).is_knight_shaped());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", MoveVector::new(-2, 1)), "(-2, 1)");
    }
}
