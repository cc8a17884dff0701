//! Inverse mapping: policy addresses back to moves.

use drophouse_core::{BoardPosition, Move, PieceKind};

use crate::coordinate::FlatIndex;
use crate::error::DecodeError;
use crate::plane::{
    DROP_OFFSET, Direction, KNIGHT_OFFSET, KNIGHT_OFFSETS, PROMOTION_OFFSET, PlaneCategory,
};
use crate::vector::MoveVector;

/// Decode a raw flat index, rejecting values past the address space.
pub fn decode_index(index: usize) -> Result<Move, DecodeError> {
    let flat = FlatIndex::new(index).ok_or(DecodeError::OutOfRange { index })?;
    decode(flat)
}

/// Decode a flat index back into the move it addresses.
///
/// Promotions are reconstructed as single pushes/captures from the seventh
/// row forward or from the second row backward. Addresses whose geometry
/// leaves the board are never produced by the encoder and fail here.
pub fn decode(flat: FlatIndex) -> Result<Move, DecodeError> {
    let coord = flat.coordinate();
    let (plane, pos) = (coord.plane, coord.position);
    let off_board = DecodeError::OffBoard {
        plane,
        row: pos.row,
        column: pos.column,
    };

    let target = |vector: MoveVector| -> Result<BoardPosition, DecodeError> {
        pos.offset(vector.d_row, vector.d_col).ok_or(off_board)
    };

    match coord.category() {
        PlaneCategory::QueenLike => {
            let direction = Direction::ALL[(plane / 7) as usize];
            let distance = (plane % 7 + 1) as i8;
            let dest = target(direction.scaled(distance))?;
            Ok(Move::new(pos.square(), dest.square()))
        }
        PlaneCategory::Knight => {
            let dest = target(KNIGHT_OFFSETS[(plane - KNIGHT_OFFSET) as usize])?;
            Ok(Move::new(pos.square(), dest.square()))
        }
        PlaneCategory::Promotion => {
            let rel = plane - PROMOTION_OFFSET;
            let piece = PieceKind::from_rank(rel / 3 + 1);
            let d_col = (rel % 3) as i8 - 1;
            let d_row = match pos.row {
                6 => 1,
                1 => -1,
                row => return Err(DecodeError::NotPromotionRank { plane, row }),
            };
            let dest = target(MoveVector::new(d_row, d_col))?;
            Ok(Move::new_promotion(pos.square(), dest.square(), piece))
        }
        PlaneCategory::Drop => {
            let piece = PieceKind::from_rank(plane - DROP_OFFSET);
            Ok(Move::new_drop(piece, pos.square()))
        }
    }
}
