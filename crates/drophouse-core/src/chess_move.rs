//! Move records and the textual move-label notation.

use std::fmt;
use std::str::FromStr;

use crate::error::LabelError;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The category of a move.
///
/// A move is either a normal board move, a pawn move ending in promotion, or a
/// drop of a piece from the hand. Promotion and drop are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    Promotion(PieceKind),
    Drop(PieceKind),
}

/// An immutable move record.
///
/// Drops carry no source square; every other move has one.
///
/// Labels use the notation `e2e4`, `e7e8q` (promotion suffix) and `N@f3`
/// (drop prefix, piece letter case-insensitive).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Option<Square>,
    dest: Square,
    kind: MoveKind,
}

impl Move {
    /// Create a normal (quiet or capture) move.
    pub const fn new(source: Square, dest: Square) -> Move {
        Move {
            source: Some(source),
            dest,
            kind: MoveKind::Normal,
        }
    }

    /// Create a promotion move.
    pub const fn new_promotion(source: Square, dest: Square, piece: PieceKind) -> Move {
        Move {
            source: Some(source),
            dest,
            kind: MoveKind::Promotion(piece),
        }
    }

    /// Create a drop of `piece` onto `dest`.
    pub const fn new_drop(piece: PieceKind, dest: Square) -> Move {
        Move {
            source: None,
            dest,
            kind: MoveKind::Drop(piece),
        }
    }

    /// Return the source square, or `None` for drops.
    #[inline]
    pub const fn source(self) -> Option<Square> {
        self.source
    }

    /// Return the destination square.
    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    /// Return the move kind.
    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    /// Return the promotion piece, if this is a promotion.
    pub const fn promotion_piece(self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion(piece) => Some(piece),
            _ => None,
        }
    }

    /// Return the dropped piece, if this is a drop.
    pub const fn drop_piece(self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Drop(piece) => Some(piece),
            _ => None,
        }
    }

    /// Return `true` if this is a drop.
    pub const fn is_drop(self) -> bool {
        matches!(self.kind, MoveKind::Drop(_))
    }

    /// Return `true` if this is a promotion.
    pub const fn is_promotion(self) -> bool {
        matches!(self.kind, MoveKind::Promotion(_))
    }

    /// Parse a move label such as `e2e4`, `e7e8q` or `N@f3`.
    pub fn from_label(label: &str) -> Result<Move, LabelError> {
        let chars: Vec<char> = label.chars().collect();

        if chars.get(1) == Some(&'@') {
            if chars.len() != 4 {
                return Err(LabelError::WrongLength {
                    label: label.to_string(),
                    length: chars.len(),
                });
            }
            let piece = PieceKind::from_letter(chars[0]).ok_or_else(|| {
                LabelError::InvalidPieceChar {
                    label: label.to_string(),
                    character: chars[0],
                }
            })?;
            let dest = parse_square(label, &chars[2..4])?;
            return Ok(Move::new_drop(piece, dest));
        }

        if chars.len() != 4 && chars.len() != 5 {
            return Err(LabelError::WrongLength {
                label: label.to_string(),
                length: chars.len(),
            });
        }

        let source = parse_square(label, &chars[0..2])?;
        let dest = parse_square(label, &chars[2..4])?;

        match chars.get(4) {
            None => Ok(Move::new(source, dest)),
            Some(&c) => {
                let piece = PieceKind::from_letter(c).ok_or_else(|| {
                    LabelError::InvalidPieceChar {
                        label: label.to_string(),
                        character: c,
                    }
                })?;
                Ok(Move::new_promotion(source, dest, piece))
            }
        }
    }

    /// Return the label for this move.
    pub fn to_label(self) -> String {
        self.to_string()
    }
}

fn parse_square(label: &str, chars: &[char]) -> Result<Square, LabelError> {
    let text: String = chars.iter().collect();
    Square::from_algebraic(&text).ok_or_else(|| LabelError::InvalidSquare {
        label: label.to_string(),
        square: text,
    })
}

impl FromStr for Move {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_label(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.source) {
            (MoveKind::Drop(piece), _) => {
                write!(f, "{}@{}", piece.letter().to_ascii_uppercase(), self.dest)
            }
            (MoveKind::Promotion(piece), Some(source)) => {
                write!(f, "{}{}{}", source, self.dest, piece.letter())
            }
            (_, Some(source)) => write!(f, "{}{}", source, self.dest),
            (_, None) => write!(f, "@{}", self.dest),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} kind={:?})", self, self.kind)
    }
}
