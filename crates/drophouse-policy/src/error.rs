//! Errors raised while encoding, decoding and building policy tables.

use drophouse_core::{LabelError, PieceKind};

use crate::vector::MoveVector;

/// Why a move's geometry fits no plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeometryFault {
    /// The movement vector fits no direction/length or knight case.
    #[error("movement vector {0} matches no plane")]
    Vector(MoveVector),
    /// The board is not square, so direction/length arithmetic is undefined.
    #[error("board of {width}x{height} is not square")]
    NonSquareBoard {
        /// Number of columns.
        width: u8,
        /// Number of rows.
        height: u8,
    },
    /// The board is square but not 8x8, which the plane layout does not cover.
    #[error("board of {size}x{size} is not covered by the 8x8 plane layout")]
    UnsupportedBoard {
        /// Number of rows and columns.
        size: u8,
    },
}

/// Errors from mapping a single move onto the policy planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The move's geometry matches no plane.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryFault),
    /// The promotion piece is not a knight, bishop, rook or queen.
    #[error("cannot promote to {kind:?}")]
    InvalidPromotion {
        /// The requested promotion piece.
        kind: PieceKind,
    },
    /// The dropped piece is a king.
    #[error("cannot drop {kind:?}")]
    InvalidDrop {
        /// The requested drop piece.
        kind: PieceKind,
    },
}

impl EncodeError {
    /// Shorthand for a vector that matches no plane.
    pub const fn vector(vector: MoveVector) -> EncodeError {
        EncodeError::InvalidGeometry(GeometryFault::Vector(vector))
    }
}

/// Errors from mapping a flat index back to a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The flat index lies outside the 81x8x8 address space.
    #[error("flat index {index} is out of range")]
    OutOfRange {
        /// The offending index.
        index: usize,
    },
    /// The plane's vector leads off the board from the given cell.
    #[error("plane {plane} leaves the board from row {row}, column {column}")]
    OffBoard {
        /// Plane of the address.
        plane: u8,
        /// Source row.
        row: u8,
        /// Source column.
        column: u8,
    },
    /// A promotion plane addressed from a row pawns cannot promote from.
    #[error("plane {plane} is a promotion plane but row {row} is not a promotion row")]
    NotPromotionRank {
        /// Plane of the address.
        plane: u8,
        /// Source row.
        row: u8,
    },
}

/// Errors from building a [`PolicyTable`](crate::table::PolicyTable).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A label could not be parsed into a move.
    #[error("label #{position} (\"{label}\") is malformed: {source}")]
    Label {
        /// Zero-based position in the label list.
        position: usize,
        /// The label text.
        label: String,
        /// The parse failure.
        source: LabelError,
    },
    /// A label parsed but its move cannot be encoded.
    #[error("label #{position} (\"{label}\") cannot be encoded: {source}")]
    Encode {
        /// Zero-based position in the label list.
        position: usize,
        /// The label text.
        label: String,
        /// The encoding failure.
        source: EncodeError,
    },
}

#[cfg(test)]
mod tests {
    use drophouse_core::PieceKind;

    use super::{EncodeError, TableError};
    use crate::vector::MoveVector;

    #[test]
    fn geometry_display() {
        let err = EncodeError::vector(MoveVector::new(0, 0));
        assert_eq!(
            format!("{err}"),
            "invalid geometry: movement vector (0, 0) matches no plane"
        );
    }

    #[test]
    fn promotion_display() {
        let err = EncodeError::InvalidPromotion {
            kind: PieceKind::Pawn,
        };
        assert_eq!(format!("{err}"), "cannot promote to Pawn");
    }

    #[test]
    fn table_error_exposes_source() {
        use std::error::Error;

        let err = TableError::Encode {
            position: 3,
            label: "K@e4".to_string(),
            source: EncodeError::InvalidDrop {
                kind: PieceKind::King,
            },
        };
        assert!(err.source().is_some());
        assert!(format!("{err}").starts_with("label #3 (\"K@e4\")"));
    }
}
