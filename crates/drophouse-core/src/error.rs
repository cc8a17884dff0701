//! Error types for move-label parsing.

/// Errors that occur when parsing a move label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    /// The label is not 4 or 5 characters long (or `P@sq` for drops).
    #[error("label \"{label}\" has length {length}, expected 4 or 5")]
    WrongLength {
        /// The offending label.
        label: String,
        /// Number of characters found.
        length: usize,
    },
    /// A square in the label is not valid algebraic notation.
    #[error("invalid square \"{square}\" in label \"{label}\"")]
    InvalidSquare {
        /// The offending label.
        label: String,
        /// The text that should have been a square.
        square: String,
    },
    /// The promotion or drop suffix/prefix is not a piece letter.
    #[error("invalid piece character '{character}' in label \"{label}\"")]
    InvalidPieceChar {
        /// The offending label.
        label: String,
        /// The character that should have named a piece.
        character: char,
    },
}
