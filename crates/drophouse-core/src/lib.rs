//! Core move types: squares, piece kinds, move records and move labels.

mod chess_move;
mod error;
mod piece_kind;
mod square;

pub use chess_move::{Move, MoveKind};
pub use error::LabelError;
pub use piece_kind::PieceKind;
pub use square::{BOARD_SIZE, BoardPosition, Square};
