//! Piece kinds and their canonical numbering.

use std::fmt;

/// The kind of a piece, without color information.
///
/// The discriminant is the canonical rank used by the policy encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 6;

    /// All piece kinds in rank order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the canonical rank (0..5).
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Create a piece kind from its canonical rank, wrapping modulo 6.
    #[inline]
    pub const fn from_rank(rank: u8) -> PieceKind {
        PieceKind::ALL[(rank % 6) as usize]
    }

    /// Create a piece kind from a one-based external code (pawn = 1 .. king = 6).
    ///
    /// Codes are shifted down by one and wrapped modulo 6, so `0` maps to king.
    #[inline]
    pub const fn from_one_based(code: u8) -> PieceKind {
        PieceKind::ALL[(code as i16 - 1).rem_euclid(6) as usize]
    }

    /// Return the lowercase letter for this piece kind.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parse a piece letter (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
